//! Query solutions
//!
//! A [`Solution`] is one result row: the terms bound to each variable.
//! Variables left unbound by an unmatched `OPTIONAL` group are simply absent.

use crate::pattern::Var;
use stanbol_graph_ir::{Literal, Term};
use std::collections::BTreeMap;

/// One result row of a `SELECT` query
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    bindings: BTreeMap<Var, Term>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `var` to `term`, or check an existing binding agrees.
    ///
    /// Returns false if `var` is already bound to a different term.
    pub fn bind(&mut self, var: &Var, term: &Term) -> bool {
        match self.bindings.get(var) {
            Some(existing) => existing == term,
            None => {
                self.bindings.insert(var.clone(), term.clone());
                true
            }
        }
    }

    /// Term bound to the variable `name` (with or without a leading `?`)
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.bindings.get(&Var::new(name))
    }

    /// Term bound to `var`
    pub fn get_var(&self, var: &Var) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// IRI bound to `name`, if bound to an IRI
    pub fn iri(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Term::as_iri)
    }

    /// Literal bound to `name`, if bound to a literal
    pub fn literal(&self, name: &str) -> Option<&Literal> {
        self.get(name).and_then(Term::as_literal)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over `(variable, term)` bindings in variable-name order
    pub fn iter(&self) -> impl Iterator<Item = (&Var, &Term)> {
        self.bindings.iter()
    }
}

impl FromIterator<(Var, Term)> for Solution {
    fn from_iter<T: IntoIterator<Item = (Var, Term)>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}
