use crate::number::Number;
use crate::symbols::{Terminal, Token};
use lexers::Scanner;
use std::str::Chars;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("invalid character '{ch}' at position {pos} in expression '{input}'")]
    UnrecognizedChar { ch: char, pos: usize, input: String },
    #[error("malformed numeric literal '{text}' at position {pos}")]
    MalformedNumber { text: String, pos: usize },
}

/// Splits arithmetic text into tokens. Whitespace is dropped, the stream is
/// terminated by an `End` token. Stops for good after the first error.
pub struct Tokenizer<'a> {
    input: &'a str,
    src: Scanner<Chars<'a>>,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer { input, src: Scanner::new(input.chars()), done: false }
    }

    fn operator(ch: char) -> Option<Terminal> {
        match ch {
            '+' => Some(Terminal::Plus),
            '-' => Some(Terminal::Minus),
            '*' => Some(Terminal::Mult),
            '/' => Some(Terminal::Div),
            '(' => Some(Terminal::LParen),
            ')' => Some(Terminal::RParen),
            _ => None,
        }
    }

    // Plain digit runs are exact integers unless they don't fit an i64
    fn literal(text: &str) -> Option<Number> {
        if text.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(n) = text.parse::<i64>() {
                return Some(Number::Int(n));
            }
        }
        text.parse::<f64>().ok().map(Number::Float)
    }

    fn get_token(&mut self) -> Result<Token, LexError> {
        self.src.skip_whitespace();
        let pos = self.src.offset();
        if let Some(kind) = self.src.peek().and_then(Self::operator) {
            self.src.next();
            self.src.ignore();
            Ok(Token::new(kind, pos))
        } else if let Some(text) = self.src.scan_numeric() {
            match Self::literal(&text) {
                Some(n) => Ok(Token::with_value(Terminal::Literal, n, pos)),
                None => Err(LexError::MalformedNumber { text, pos }),
            }
        } else if let Some(ch) = self.src.next() {
            Err(LexError::UnrecognizedChar { ch, pos, input: self.input.to_string() })
        } else {
            self.done = true;
            Ok(Token::new(Terminal::End, pos))
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.get_token();
        if token.is_err() {
            self.done = true;
        }
        Some(token)
    }
}

/// Tokenize the whole input, failing on the first bad lexeme.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Tokenizer::new(input).collect::<Result<Vec<_>, _>>()?;
    tracing::trace!("tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}

///////////////////////////////////////////////////////////////////////////////
