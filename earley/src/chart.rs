#![deny(warnings)]

use crate::state::ParserState;
use crate::symbol::Tag;
use std::collections::HashSet;
use std::ops::Index;
use std::rc::Rc;
use std::{fmt, slice};


/// Insertion ordered set of states that doubles as a worklist.
///
/// `order` keeps states in the order they were added, `dedup` answers
/// membership and `processed` marks how far the worklist has been consumed.
/// States pushed while the set is being worked are still visited.
pub struct StateSet<T, N, V> {
    order: Vec<Rc<ParserState<T, N, V>>>,
    dedup: HashSet<Rc<ParserState<T, N, V>>>,
    processed: usize,
}

/// One StateSet per input position.
pub struct Chart<T, N, V>(Vec<StateSet<T, N, V>>);


impl<T, N, V> Default for StateSet<T, N, V> {
    fn default() -> Self {
        StateSet { order: Vec::new(), dedup: HashSet::new(), processed: 0 }
    }
}

impl<T: Tag, N: Tag, V> StateSet<T, N, V> {
    /// Add `state` unless an equal one is already there, in which case the
    /// existing state (and its children) is kept. Returns whether it was added.
    pub fn push(&mut self, state: ParserState<T, N, V>) -> bool {
        if self.dedup.contains(&state) {
            return false;
        }
        let state = Rc::new(state);
        self.order.push(state.clone());
        self.dedup.insert(state);
        true
    }

    /// Next state that hasn't been handed out yet.
    pub fn pop_next(&mut self) -> Option<Rc<ParserState<T, N, V>>> {
        let state = self.order.get(self.processed)?.clone();
        self.processed += 1;
        Some(state)
    }

    /// The stored state equal to `probe`, if any.
    pub fn get(&self, probe: &ParserState<T, N, V>) -> Option<&Rc<ParserState<T, N, V>>> {
        self.dedup.get(probe)
    }

    pub fn contains(&self, probe: &ParserState<T, N, V>) -> bool {
        self.dedup.contains(probe)
    }

    pub fn len(&self) -> usize { self.order.len() }

    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    pub fn iter(&self) -> slice::Iter<'_, Rc<ParserState<T, N, V>>> { self.order.iter() }

    /// States waiting on nonterminal `head` as their next symbol.
    pub fn waiting_on(&self, head: N) -> impl Iterator<Item = &Rc<ParserState<T, N, V>>> + '_ {
        self.order.iter()
            .filter(move |state| state.next_symbol().and_then(|s| s.nonterm()) == Some(head))
    }
}

impl<T, N, V> Index<usize> for StateSet<T, N, V> {
    type Output = Rc<ParserState<T, N, V>>;
    fn index(&self, idx: usize) -> &Self::Output { &self.order[idx] }
}

impl<T: Tag, N: Tag, V> fmt::Debug for StateSet<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.order.iter()).finish()
    }
}

impl<T: Tag, N: Tag, V> Chart<T, N, V> {
    /// An empty chart with `columns` StateSets.
    pub fn new(columns: usize) -> Self {
        Chart((0..columns).map(|_| StateSet::default()).collect())
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn column(&self, idx: usize) -> &StateSet<T, N, V> { &self.0[idx] }

    pub fn column_mut(&mut self, idx: usize) -> &mut StateSet<T, N, V> { &mut self.0[idx] }

    pub fn last(&self) -> Option<&StateSet<T, N, V>> { self.0.last() }

    pub fn columns(&self) -> slice::Iter<'_, StateSet<T, N, V>> { self.0.iter() }
}

impl<T: Tag, N: Tag, V> fmt::Display for Chart<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, stateset) in self.0.iter().enumerate() {
            writeln!(f, "=== StateSet {} ===", idx)?;
            for state in stateset.iter() {
                writeln!(f, "{:?}", state)?;
            }
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////
