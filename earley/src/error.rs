#![deny(warnings)]

use thiserror::Error;

/// Grammar configuration problems and engine contract violations.
/// Unparseable input is not an error, see `EarleyParser::parse`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("grammar must contain at least one rule")]
    EmptyGrammar,
    #[error("duplicate rule: {0}")]
    DuplicateRule(String),
    #[error("rule has an empty expansion: {0}")]
    EmptyRule(String),
    #[error("missing rule for nonterminal: {0}")]
    MissingRule(String),
    #[error("cursor {cursor} exceeds expansion length {len} of rule {rule}")]
    CursorOutOfRange { rule: String, cursor: usize, len: usize },
    #[error("cannot advance complete state: {0}")]
    AdvanceComplete(String),
    #[error("token stream is empty, expected at least an end-of-input marker")]
    EmptyInput,
}

/// Failures evaluating an accepted parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("incomplete parse, cannot evaluate {rule}")]
    Incomplete { rule: String },
    #[error("token {token} carries no value")]
    MissingValue { token: String },
    #[error("unexpected child for {rule} at slot {slot}")]
    UnexpectedChild { rule: String, slot: usize },
    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
    #[error("{0}")]
    Action(String),
}
