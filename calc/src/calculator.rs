use crate::grammar::grammar;
use crate::lexer::{tokenize, LexError};
use crate::number::Number;
use crate::symbols::{Grammar, Parser, State};
use earley::EvalError;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("no parse for '{input}'")]
    NoParse { input: String },
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),
    #[error("parser failure: {0}")]
    Grammar(#[from] earley::Error),
}

/// Text in, number out: tokenize, parse with the arithmetic grammar and
/// evaluate the accepted parse.
pub struct Calculator {
    parser: Parser,
}

impl Calculator {
    pub fn new() -> Result<Self, earley::Error> {
        Ok(Self::with_grammar(grammar()?))
    }

    pub fn with_grammar(grammar: Grammar) -> Self {
        Calculator { parser: Parser::new(grammar) }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.parser.grammar
    }

    /// The accepted parse for `input`, None if it isn't an expression.
    pub fn parse(&self, input: &str) -> Result<Option<Rc<State>>, CalcError> {
        let tokens = tokenize(input)?;
        Ok(self.parser.parse(&tokens)?)
    }

    pub fn evaluate(&self, input: &str) -> Result<Number, CalcError> {
        let accepted = self.parse(input)?
            .ok_or_else(|| CalcError::NoParse { input: input.to_string() })?;
        let value = accepted.evaluate()?;
        tracing::debug!("{} => {}", input, value);
        Ok(value)
    }
}
