#![deny(warnings)]

use crate::error::{Error, EvalError};
use crate::grammar::Rule;
use crate::symbol::{Symbol, Tag, Token};
use std::cell::Cell;
use std::rc::Rc;
use std::{fmt, hash};

/// Deepest chain of nested states `evaluate` walks before giving up.
pub const MAX_EVAL_DEPTH: usize = 512;

thread_local! {
    // ParserState::evaluate calls active on this thread
    static EVAL_DEPTH: Cell<usize> = const { Cell::new(0) };
}


/// Something matched by one slot of a rule: a scanned token or a completed
/// sub-parse.
#[derive(Clone)]
pub enum Child<T, N, V> {
    Token(Token<T, V>),
    State(Rc<ParserState<T, N, V>>),
}

/// A partially matched `Rule` (an Earley item). `cursor` shows the match
/// progress, `origin` is the chart column where matching began.
///
/// States are values: every transition builds a new state. Children are
/// stored for slots `0..cursor` only, slots past the cursor are unfilled.
pub struct ParserState<T, N, V> {
    rule: Rc<Rule<T, N, V>>,
    cursor: usize,
    origin: usize,
    children: Vec<Child<T, N, V>>,
}


impl<T: Tag, N: Tag, V: Clone> Child<T, N, V> {
    /// Sub-parses evaluate recursively, tokens yield their literal value.
    pub fn evaluate(&self) -> Result<V, EvalError> {
        match self {
            Child::State(state) => state.evaluate(),
            Child::Token(token) => token.value.clone().ok_or_else(|| {
                EvalError::MissingValue { token: format!("{:?}", token.kind) }
            }),
        }
    }

    pub fn token(&self) -> Option<&Token<T, V>> {
        match self {
            Child::Token(token) => Some(token),
            Child::State(_) => None,
        }
    }

    pub fn state(&self) -> Option<&Rc<ParserState<T, N, V>>> {
        match self {
            Child::State(state) => Some(state),
            Child::Token(_) => None,
        }
    }
}

impl<T: Tag, N: Tag, V> fmt::Debug for Child<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Child::Token(token) => write!(f, "Token({:?}@{})", token.kind, token.pos),
            Child::State(state) => write!(f, "State({})", state),
        }
    }
}

// States are deduped only by rule, cursor and origin (ie: not children).
// Two derivations reaching the same item are the same item to the chart.
impl<T: Tag, N: Tag, V> hash::Hash for ParserState<T, N, V> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.rule.hash(state);
        self.cursor.hash(state);
        self.origin.hash(state);
    }
}

impl<T: Tag, N: Tag, V> PartialEq for ParserState<T, N, V> {
    fn eq(&self, other: &Self) -> bool {
        (Rc::ptr_eq(&self.rule, &other.rule) || self.rule == other.rule) &&
        self.cursor == other.cursor &&
        self.origin == other.origin
    }
}

impl<T: Tag, N: Tag, V> Eq for ParserState<T, N, V> {}

impl<T: Tag, N: Tag, V> fmt::Display for ParserState<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}) {:?} ->", self.origin, self.rule.head)?;
        for sym in &self.rule.spec[..self.cursor] {
            write!(f, " {}", sym)?;
        }
        write!(f, " \u{00b7}")?;
        for sym in &self.rule.spec[self.cursor..] {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

impl<T: Tag, N: Tag, V> fmt::Debug for ParserState<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} #children: {}", self, self.children.len())
    }
}

impl<T: Tag, N: Tag, V> ParserState<T, N, V> {
    /// Build a state for `rule` with nothing matched yet.
    pub fn start(rule: &Rc<Rule<T, N, V>>, origin: usize) -> Self {
        ParserState { rule: rule.clone(), cursor: 0, origin, children: Vec::new() }
    }

    /// Build a state at an arbitrary cursor. No children are recorded so the
    /// result is only good for membership checks.
    pub fn new(rule: &Rc<Rule<T, N, V>>, cursor: usize, origin: usize) -> Result<Self, Error> {
        if cursor > rule.len() {
            return Err(Error::CursorOutOfRange {
                rule: rule.to_string(),
                cursor,
                len: rule.len(),
            });
        }
        Ok(ParserState { rule: rule.clone(), cursor, origin, children: Vec::new() })
    }

    pub fn rule(&self) -> &Rc<Rule<T, N, V>> { &self.rule }
    pub fn cursor(&self) -> usize { self.cursor }
    pub fn origin(&self) -> usize { self.origin }
    pub fn children(&self) -> &[Child<T, N, V>] { &self.children }

    /// Check if the rule's head (LHS) is `symbol`.
    pub fn matches_name(&self, symbol: N) -> bool {
        self.rule.has_head(symbol)
    }

    /// State is complete when its rule has been fully matched.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.rule.len()
    }

    /// Exposes the next symbol in the progress of the rule. None if complete.
    pub fn next_symbol(&self) -> Option<Symbol<T, N>> {
        self.rule.spec.get(self.cursor).copied()
    }

    pub fn is_terminal_next(&self) -> bool {
        self.next_symbol().is_some_and(|sym| sym.is_terminal())
    }

    /// Same rule, fresh attempt starting at `origin`.
    pub fn restart_at(&self, origin: usize) -> Self {
        ParserState::start(&self.rule, origin)
    }

    /// Move the cursor over one slot recording what matched it.
    pub fn advance(&self, matched: Child<T, N, V>) -> Result<Self, Error>
    where T: Clone, N: Clone, V: Clone
    {
        if self.is_complete() {
            return Err(Error::AdvanceComplete(self.to_string()));
        }
        let mut children = Vec::with_capacity(self.cursor + 1);
        children.extend(self.children.iter().cloned());
        children.push(matched);
        Ok(ParserState {
            rule: self.rule.clone(),
            cursor: self.cursor + 1,
            origin: self.origin,
            children,
        })
    }

    /// Complete-cursor variant of this state, used to probe the chart for
    /// acceptance. Carries no children.
    pub fn as_fully_matched(&self) -> Self {
        ParserState {
            rule: self.rule.clone(),
            cursor: self.rule.len(),
            origin: self.origin,
            children: Vec::new(),
        }
    }
}

impl<T: Tag, N: Tag, V: Clone> ParserState<T, N, V> {
    /// Run the rule's semantic action over the matched children. Actions
    /// evaluate their children recursively, nesting is capped at
    /// `MAX_EVAL_DEPTH` states.
    pub fn evaluate(&self) -> Result<V, EvalError> {
        if self.children.len() != self.rule.len() {
            return Err(EvalError::Incomplete { rule: self.to_string() });
        }
        let _depth = DepthGuard::enter()?;
        tracing::trace!("evaluate {}", self.rule);
        self.rule.apply(&self.children)
    }
}

struct DepthGuard;

impl DepthGuard {
    fn enter() -> Result<DepthGuard, EvalError> {
        EVAL_DEPTH.with(|depth| {
            if depth.get() >= MAX_EVAL_DEPTH {
                tracing::debug!("evaluation nested past {} states", MAX_EVAL_DEPTH);
                return Err(EvalError::TooDeep { limit: MAX_EVAL_DEPTH });
            }
            depth.set(depth.get() + 1);
            Ok(DepthGuard)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        EVAL_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

// Unlink nested states with a work list, long chains would blow the stack
// if dropped recursively.
impl<T, N, V> Drop for ParserState<T, N, V> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_states(&mut self.children, &mut pending);
        while let Some(state) = pending.pop() {
            // shared states are still alive elsewhere
            if let Ok(mut state) = Rc::try_unwrap(state) {
                take_states(&mut state.children, &mut pending);
            }
        }
    }
}

fn take_states<T, N, V>(
    children: &mut Vec<Child<T, N, V>>,
    out: &mut Vec<Rc<ParserState<T, N, V>>>)
{
    out.extend(children.drain(..).filter_map(|child| match child {
        Child::State(state) => Some(state),
        Child::Token(_) => None,
    }));
}

///////////////////////////////////////////////////////////////////////////////
