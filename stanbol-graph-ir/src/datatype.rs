//! Literal datatypes
//!
//! Every literal has a datatype IRI. Plain strings are `xsd:string` and
//! language-tagged strings are `rdf:langString`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Datatype IRIs used by the constructors below
pub mod iri {
    pub use stanbol_vocab::rdf::LANG_STRING as RDF_LANG_STRING;
    pub use stanbol_vocab::xsd::{
        ANY_URI as XSD_ANY_URI, BOOLEAN as XSD_BOOLEAN, DATE_TIME as XSD_DATE_TIME,
        DECIMAL as XSD_DECIMAL, DOUBLE as XSD_DOUBLE, FLOAT as XSD_FLOAT, INT as XSD_INT,
        INTEGER as XSD_INTEGER, LONG as XSD_LONG, STRING as XSD_STRING,
    };
}

/// RDF literal datatype (always an expanded IRI)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:int, used by engines for character offsets
    pub fn xsd_int() -> Self {
        Self::from_iri(iri::XSD_INT)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(iri::XSD_DOUBLE)
    }

    /// xsd:dateTime
    pub fn xsd_date_time() -> Self {
        Self::from_iri(iri::XSD_DATE_TIME)
    }

    pub fn rdf_lang_string() -> Self {
        Self::from_iri(iri::RDF_LANG_STRING)
    }

    /// Get the IRI of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is xsd:string
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }

    /// Check if this is rdf:langString
    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == iri::RDF_LANG_STRING
    }

    /// Check if this is one of the integral XSD types
    pub fn is_integral(&self) -> bool {
        matches!(
            self.as_iri(),
            iri::XSD_INTEGER | iri::XSD_INT | iri::XSD_LONG
        )
    }

    /// Check if values of this datatype can be read as a floating point number
    pub fn is_numeric(&self) -> bool {
        self.is_integral()
            || matches!(
                self.as_iri(),
                iri::XSD_DOUBLE | iri::XSD_FLOAT | iri::XSD_DECIMAL
            )
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}
