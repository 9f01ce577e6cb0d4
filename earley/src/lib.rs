//! Earley chart parsing for context free grammars whose rules carry their
//! own semantics.
//!
//! The parser recognizes a token slice and hands back the accepted
//! `ParserState`; evaluating it runs each rule's semantic action bottom-up
//! over the matched children.

#![deny(warnings)]

mod symbol;
pub use crate::symbol::{Symbol, Tag, Token};

mod error;
pub use crate::error::{Error, EvalError};

mod grammar;
pub use crate::grammar::{Grammar, GrammarBuilder, Rule, SemanticAction};

mod state;
pub use crate::state::{Child, ParserState, MAX_EVAL_DEPTH};

mod chart;
pub use crate::chart::{Chart, StateSet};

mod parser;
pub use crate::parser::EarleyParser;

#[cfg(test)]
mod parser_test;
