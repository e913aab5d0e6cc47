//! Triple pattern types for query representation
//!
//! A [`TriplePattern`] has a [`PatternTerm`] in each position: either a
//! constant [`Term`] or a named [`Var`] that is bound by matching.

use stanbol_graph_ir::Term;
use stanbol_vocab::rdf;
use std::sync::Arc;

/// Query variable, named without the leading `?`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(Arc<str>);

impl Var {
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Var(Arc::from(name.strip_prefix('?').unwrap_or(name)))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// A term in a triple pattern - variable or constant
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternTerm {
    /// Variable binding
    Var(Var),
    /// Constant term
    Const(Term),
}

impl PatternTerm {
    /// Check if this term is a variable
    pub fn is_var(&self) -> bool {
        matches!(self, PatternTerm::Var(_))
    }

    /// Get the variable if this is a Var term
    pub fn as_var(&self) -> Option<&Var> {
        match self {
            PatternTerm::Var(v) => Some(v),
            PatternTerm::Const(_) => None,
        }
    }

    /// Get the constant if this is a Const term
    pub fn as_const(&self) -> Option<&Term> {
        match self {
            PatternTerm::Const(t) => Some(t),
            PatternTerm::Var(_) => None,
        }
    }

    /// Check if this term is the constant rdf:type
    pub fn is_rdf_type(&self) -> bool {
        matches!(self, PatternTerm::Const(Term::Iri(iri)) if iri.as_ref() == rdf::TYPE)
    }
}

impl From<Var> for PatternTerm {
    fn from(v: Var) -> Self {
        PatternTerm::Var(v)
    }
}

impl From<Term> for PatternTerm {
    fn from(t: Term) -> Self {
        PatternTerm::Const(t)
    }
}

impl std::fmt::Display for PatternTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternTerm::Var(v) => write!(f, "{}", v),
            PatternTerm::Const(t) => write!(f, "{}", t),
        }
    }
}

/// A triple pattern for matching statements
///
/// Each position can be a variable or a constant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TriplePattern {
    pub s: PatternTerm,
    pub p: PatternTerm,
    pub o: PatternTerm,
}

impl TriplePattern {
    /// Create a new triple pattern
    pub fn new(
        s: impl Into<PatternTerm>,
        p: impl Into<PatternTerm>,
        o: impl Into<PatternTerm>,
    ) -> Self {
        Self {
            s: s.into(),
            p: p.into(),
            o: o.into(),
        }
    }

    /// `s rdf:type class`
    pub fn typed(s: impl Into<PatternTerm>, class: &str) -> Self {
        Self::new(s, Term::iri(rdf::TYPE), Term::iri(class))
    }

    /// Get the variables in this pattern (in order: s, p, o)
    pub fn variables(&self) -> Vec<&Var> {
        [&self.s, &self.p, &self.o]
            .into_iter()
            .filter_map(PatternTerm::as_var)
            .collect()
    }

    /// Check the constant positions can ever match an RDF statement.
    ///
    /// A literal cannot be a subject and only IRIs can be predicates.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(t) = self.s.as_const() {
            if t.is_literal() {
                return Err(format!("literal in subject position: {}", self));
            }
        }
        if let Some(t) = self.p.as_const() {
            if !t.is_iri() {
                return Err(format!("non-IRI predicate: {}", self));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.s, self.p, self.o)
    }
}
