//! RDF terms
//!
//! A [`Term`] is an expanded IRI, a blank node scoped to one response, or a
//! [`Literal`] carrying its lexical form, datatype and optional language tag.

use crate::Datatype;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Blank node identifier
///
/// Blank node IDs are stable within one response but have no global meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// `label` is given without the `_:` prefix
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF literal
///
/// # Invariants
///
/// - A literal with a language tag always has datatype `rdf:langString`.
/// - The lexical form is stored as received; typed accessors parse it on demand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    lexical: Arc<str>,
    datatype: Datatype,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Plain string literal (xsd:string)
    pub fn string(value: impl AsRef<str>) -> Self {
        Self::typed(value, Datatype::xsd_string())
    }

    /// Language-tagged string literal (rdf:langString)
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(value.as_ref()),
            datatype: Datatype::rdf_lang_string(),
            language: Some(Arc::from(lang.as_ref())),
        }
    }

    /// Literal with an explicit datatype
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Self {
            lexical: Arc::from(value.as_ref()),
            datatype,
            language: None,
        }
    }

    /// The lexical form
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Shared handle to the lexical form
    pub fn lexical_arc(&self) -> &Arc<str> {
        &self.lexical
    }

    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    /// Language tag, if this is a language-tagged string
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Read the lexical form as a double.
    ///
    /// Accepts the XSD special values `INF`, `-INF` and `NaN`. Surrounding
    /// whitespace is ignored (XSD whitespace facet `collapse`).
    pub fn as_f64(&self) -> Option<f64> {
        match self.lexical.trim() {
            "INF" | "+INF" => Some(f64::INFINITY),
            "-INF" => Some(f64::NEG_INFINITY),
            "NaN" => Some(f64::NAN),
            s => s.parse().ok(),
        }
    }

    /// Read the lexical form as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        let s = self.lexical.trim();
        s.strip_prefix('+').unwrap_or(s).parse().ok()
    }

    /// Read the lexical form as a boolean (`true`/`false`/`1`/`0`).
    pub fn as_bool(&self) -> Option<bool> {
        match self.lexical.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

/// Subject, predicate or object of a statement
///
/// IRIs are stored expanded. Terms order as `BlankNode < Iri < Literal`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    BlankNode(BlankId),

    /// Full expanded IRI (e.g., "http://dbpedia.org/resource/Paris")
    Iri(Arc<str>),

    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// `xsd:string` literal
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::Literal(Literal::string(value))
    }

    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal(Literal::lang_string(value, lang))
    }

    /// Create a typed literal from its lexical form
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal(Literal::typed(value, datatype))
    }

    /// `xsd:double` literal
    pub fn double(value: f64) -> Self {
        Self::typed(value.to_string(), Datatype::xsd_double())
    }

    /// `xsd:int` literal
    pub fn int(value: i64) -> Self {
        Self::typed(value.to_string(), Datatype::xsd_int())
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// IRI or blank node
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Stable string identity of a resource term.
    ///
    /// IRIs yield the IRI itself and blank nodes yield `_:label`; literals have
    /// no resource identity.
    pub fn resource_key(&self) -> Option<Arc<str>> {
        match self {
            Term::Iri(iri) => Some(iri.clone()),
            Term::BlankNode(id) => Some(Arc::from(id.to_string())),
            Term::Literal(_) => None,
        }
    }

    /// The plain value of this term: the IRI, the `_:label` of a blank node,
    /// or the lexical form of a literal.
    pub fn value(&self) -> Arc<str> {
        match self {
            Term::Iri(iri) => iri.clone(),
            Term::BlankNode(id) => Arc::from(id.to_string()),
            Term::Literal(lit) => lit.lexical.clone(),
        }
    }

    /// Parse a resource key produced by [`Term::resource_key`] back into a term
    pub fn from_resource_key(key: &str) -> Self {
        match key.strip_prefix("_:") {
            Some(label) => Term::blank(label),
            None => Term::iri(key),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(id) => write!(f, "{}", id),
            Term::Literal(lit) => {
                write!(f, "\"{}\"", lit.lexical.escape_default())?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{}", lang)
                } else if !lit.datatype.is_xsd_string() {
                    write!(f, "^^{}", lit.datatype)
                } else {
                    Ok(())
                }
            }
        }
    }
}
