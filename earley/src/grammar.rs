#![deny(warnings)]

use crate::error::{Error, EvalError};
use crate::state::Child;
use crate::symbol::{Symbol, Tag};
use std::rc::Rc;
use std::{fmt, hash};

/// Semantics attached to a rule: build a value out of the matched children.
pub type SemanticAction<T, N, V> = fn(&[Child<T, N, V>]) -> Result<V, EvalError>;

pub struct Rule<T, N, V> {
    pub head: N,
    pub spec: Vec<Symbol<T, N>>,
    action: SemanticAction<T, N, V>,
}

#[derive(Clone)]
pub struct Grammar<T, N, V> {
    rules: Vec<Rc<Rule<T, N, V>>>,
}

pub struct GrammarBuilder<T, N, V> {
    rules: Vec<Rc<Rule<T, N, V>>>,
    error: Option<Error>,
}


impl<T: Tag, N: Tag, V> Rule<T, N, V> {
    pub fn new(head: N, spec: &[Symbol<T, N>], action: SemanticAction<T, N, V>) -> Self {
        Rule { head, spec: spec.to_vec(), action }
    }

    pub fn has_head(&self, symbol: N) -> bool {
        self.head == symbol
    }

    pub fn len(&self) -> usize {
        self.spec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spec.is_empty()
    }

    pub(crate) fn apply(&self, children: &[Child<T, N, V>]) -> Result<V, EvalError> {
        (self.action)(children)
    }
}

// Rule identity is (head, spec). The action is carried, never compared.
impl<T: Tag, N: Tag, V> PartialEq for Rule<T, N, V> {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head && self.spec == other.spec
    }
}

impl<T: Tag, N: Tag, V> Eq for Rule<T, N, V> {}

impl<T: Tag, N: Tag, V> hash::Hash for Rule<T, N, V> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        self.spec.hash(state);
    }
}

impl<T: Tag, N: Tag, V> fmt::Display for Rule<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} ->", self.head)?;
        for sym in &self.spec {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

impl<T: Tag, N: Tag, V> fmt::Debug for Rule<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T: Tag, N: Tag, V> Grammar<T, N, V> {
    pub fn builder() -> GrammarBuilder<T, N, V> {
        GrammarBuilder::default()
    }

    /// Rule 0, the accept rule. Grammars are never empty.
    pub fn start_rule(&self) -> &Rc<Rule<T, N, V>> {
        &self.rules[0]
    }

    pub fn rules(&self) -> &[Rc<Rule<T, N, V>>] {
        &self.rules
    }

    /// Expansions for `head`, in declaration order (used by the predictor).
    pub fn rules_for(&self, head: N) -> impl Iterator<Item = &Rc<Rule<T, N, V>>> + '_ {
        self.rules.iter().filter(move |rule| rule.has_head(head))
    }
}

impl<T: Tag, N: Tag, V> fmt::Display for Grammar<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, rule) in self.rules.iter().enumerate() {
            writeln!(f, "{:>3}: {}", idx, rule)?;
        }
        Ok(())
    }
}

impl<T: Tag, N: Tag, V> fmt::Debug for Grammar<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}

impl<T, N, V> Default for GrammarBuilder<T, N, V> {
    fn default() -> Self {
        GrammarBuilder { rules: Vec::new(), error: None }
    }
}

/// Builds a Grammar checking rules as they're added. The first rule added
/// becomes the start rule. Only the first error found is reported.
impl<T: Tag, N: Tag, V> GrammarBuilder<T, N, V> {
    fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Non-chaining version, handy when registering rules in a loop.
    pub fn add_rule(
        &mut self,
        head: N,
        spec: &[Symbol<T, N>],
        action: SemanticAction<T, N, V>)
    {
        let rule = Rc::new(Rule::new(head, spec, action));
        if rule.is_empty() {
            self.fail(Error::EmptyRule(rule.to_string()));
        } else if self.rules.contains(&rule) {
            self.fail(Error::DuplicateRule(rule.to_string()));
        } else {
            self.rules.push(rule);
        }
    }

    pub fn rule(
        mut self,
        head: N,
        spec: &[Symbol<T, N>],
        action: SemanticAction<T, N, V>) -> Self
    {
        self.add_rule(head, spec, action);
        self
    }

    pub fn into_grammar(mut self) -> Result<Grammar<T, N, V>, Error> {
        if self.rules.is_empty() {
            self.fail(Error::EmptyGrammar);
        }
        // Every nonterminal on a right hand side needs an expansion
        let missing = self.rules.iter()
            .flat_map(|rule| rule.spec.iter())
            .filter_map(|sym| sym.nonterm())
            .find(|n| !self.rules.iter().any(|rule| rule.has_head(*n)));
        if let Some(n) = missing {
            self.fail(Error::MissingRule(format!("{:?}", n)));
        }
        match self.error {
            Some(error) => Err(error),
            None => {
                tracing::debug!("built grammar with {} rules", self.rules.len());
                Ok(Grammar { rules: self.rules })
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
