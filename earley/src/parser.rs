#![deny(warnings)]

use crate::chart::Chart;
use crate::error::Error;
use crate::grammar::Grammar;
use crate::state::{Child, ParserState};
use crate::symbol::{Symbol, Tag, Token};
use std::rc::Rc;

pub struct EarleyParser<T, N, V> {
    pub grammar: Grammar<T, N, V>,
}

///////////////////////////////////////////////////////////////////////////////

impl<T: Tag, N: Tag, V: Clone> EarleyParser<T, N, V> {
    pub fn new(grammar: Grammar<T, N, V>) -> Self {
        EarleyParser { grammar }
    }

    /// Add a fresh state at column `k` for every expansion of `head`.
    /// Left recursive rules stop here because re-adding a state is a noop.
    fn predict(&self, chart: &mut Chart<T, N, V>, head: N, k: usize) {
        for rule in self.grammar.rules_for(head) {
            let prediction = ParserState::start(rule, k);
            tracing::trace!("predict {} @{}", prediction, k);
            chart.column_mut(k).push(prediction);
        }
    }

    /// Advance `state` over `tokens[k]` into column `k+1` if the tags match.
    fn scan(
        &self,
        chart: &mut Chart<T, N, V>,
        state: &ParserState<T, N, V>,
        expected: T,
        tokens: &[Token<T, V>],
        k: usize,
    ) -> Result<(), Error>
    {
        // Last column has no input left to scan
        let Some(token) = tokens.get(k) else { return Ok(()) };
        if token.matches(expected) {
            let scanned = state.advance(Child::Token(token.clone()))?;
            tracing::trace!("scan {:?} -> {} @{}", token.kind, scanned, k + 1);
            chart.column_mut(k + 1).push(scanned);
        }
        Ok(())
    }

    /// `trigger` completed its rule: advance every state in its origin column
    /// that was waiting on the rule's head. New states land in column `k`.
    fn complete(
        &self,
        chart: &mut Chart<T, N, V>,
        trigger: &Rc<ParserState<T, N, V>>,
        k: usize,
    ) -> Result<(), Error>
    {
        let head = trigger.rule().head;
        let completions = chart.column(trigger.origin())
            .waiting_on(head)
            .map(|waiting| waiting.advance(Child::State(trigger.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        for completion in completions {
            tracing::trace!("complete {} -> {} @{}", trigger, completion, k);
            chart.column_mut(k).push(completion);
        }
        Ok(())
    }

    /// Run predictor/scanner/completer over the whole input. The chart has
    /// one column per token plus the initial one.
    pub fn build_chart(&self, tokens: &[Token<T, V>]) -> Result<Chart<T, N, V>, Error> {
        if tokens.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut chart = Chart::new(tokens.len() + 1);
        chart.column_mut(0).push(ParserState::start(self.grammar.start_rule(), 0));

        for k in 0..chart.len() {
            // States added while working column k get visited before moving on
            while let Some(state) = chart.column_mut(k).pop_next() {
                match state.next_symbol() {
                    None => self.complete(&mut chart, &state, k)?,
                    Some(Symbol::NonTerm(head)) => self.predict(&mut chart, head, k),
                    Some(Symbol::Term(expected)) =>
                        self.scan(&mut chart, &state, expected, tokens, k)?,
                }
            }
            tracing::trace!("column {} closed with {} states", k, chart.column(k).len());
        }
        tracing::trace!("chart:\n{}", chart);
        Ok(chart)
    }

    /// The accepted state: start rule fully matched from origin 0 in the last
    /// column. This is the stored state, the one carrying the children.
    pub fn accepted(&self, chart: &Chart<T, N, V>) -> Option<Rc<ParserState<T, N, V>>> {
        let probe = ParserState::start(self.grammar.start_rule(), 0).as_fully_matched();
        chart.last()?.get(&probe).cloned()
    }

    /// Recognize `tokens`. Input outside the grammar's language is `Ok(None)`,
    /// errors are reserved for malformed input or grammar/engine defects.
    pub fn parse(&self, tokens: &[Token<T, V>]) -> Result<Option<Rc<ParserState<T, N, V>>>, Error> {
        let chart = self.build_chart(tokens)?;
        let accepted = self.accepted(&chart);
        match &accepted {
            Some(state) => tracing::debug!("accepted: {}", state),
            None => tracing::debug!("rejected: no parse for {} tokens", tokens.len()),
        }
        Ok(accepted)
    }
}
