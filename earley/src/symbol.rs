#![deny(warnings)]

use std::{fmt, hash};

/// Anything usable as a grammar tag: terminal kinds and nonterminal names.
pub trait Tag: Copy + Eq + hash::Hash + fmt::Debug {}

impl<X: Copy + Eq + hash::Hash + fmt::Debug> Tag for X {}

/// A grammar symbol. Symbols compare by tag only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol<T, N> {
    Term(T),
    NonTerm(N),
}

impl<T: Tag, N: Tag> Symbol<T, N> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Term(_))
    }

    pub fn nonterm(&self) -> Option<N> {
        match self {
            Symbol::NonTerm(n) => Some(*n),
            Symbol::Term(_) => None,
        }
    }
}

impl<T: Tag, N: Tag> fmt::Display for Symbol<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Term(t) => write!(f, "{:?}", t),
            Symbol::NonTerm(n) => write!(f, "{:?}", n),
        }
    }
}

/// A lexeme handed to the parser: a terminal tag plus an optional value.
/// `pos` is the char offset in the source text, kept for messages only.
#[derive(Clone, Debug)]
pub struct Token<T, V> {
    pub kind: T,
    pub value: Option<V>,
    pub pos: usize,
}

impl<T: Tag, V> Token<T, V> {
    pub fn new(kind: T, pos: usize) -> Self {
        Token { kind, value: None, pos }
    }

    pub fn with_value(kind: T, value: V, pos: usize) -> Self {
        Token { kind, value: Some(value), pos }
    }

    /// Grammar matching only looks at the tag, never at the value.
    pub fn matches(&self, kind: T) -> bool {
        self.kind == kind
    }
}

///////////////////////////////////////////////////////////////////////////////
