//! RDF statement

use crate::Term;
use serde::{Deserialize, Serialize};

/// A subject-predicate-object statement
///
/// Triples order by (subject, predicate, object).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (IRI or blank node)
    pub s: Term,
    /// Predicate (IRI)
    pub p: Term,
    /// Object (any term)
    pub o: Term,
}

impl Triple {
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }

    /// Check that the triple is well-formed RDF: resource subject, IRI predicate
    pub fn is_well_formed(&self) -> bool {
        self.s.is_resource() && self.p.is_iri()
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ntriples_display() {
        let t = Triple::new(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
        );
        assert_eq!(
            t.to_string(),
            "<http://example.org/s> <http://example.org/p> \"o\" ."
        );
    }

    #[test]
    fn test_well_formed() {
        let ok = Triple::new(Term::blank("b"), Term::iri("p:x"), Term::string("v"));
        assert!(ok.is_well_formed());

        let literal_subject = Triple::new(Term::string("s"), Term::iri("p:x"), Term::string("v"));
        assert!(!literal_subject.is_well_formed());

        let blank_predicate = Triple::new(Term::iri("s:x"), Term::blank("p"), Term::string("v"));
        assert!(!blank_predicate.is_well_formed());
    }
}
