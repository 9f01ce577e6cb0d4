//! Arithmetic evaluation on top of the `earley` chart parser.
//!
//! `lexer` turns text into tokens, `grammar` holds the arithmetic rules and
//! their semantics, `Calculator` ties both to an `EarleyParser`.

mod symbols;
pub use crate::symbols::{Child, Grammar, NonTerminal, Parser, State, Terminal, Token};

mod number;
pub use crate::number::Number;

pub mod lexer;
pub use crate::lexer::{tokenize, LexError, Tokenizer};

pub mod grammar;
pub use crate::grammar::grammar;

mod calculator;
pub use crate::calculator::{CalcError, Calculator};
