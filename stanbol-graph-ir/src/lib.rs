//! RDF terms and statements as they arrive in an enhancement response
//!
//! This crate provides the value types shared by the triple store adapter and
//! the enhancement parser.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!
//! 2. **Lexical literals** - Literals keep the lexical form they were received
//!    in. Typed accessors (`as_f64()`, `as_i64()`, ...) parse on demand, so a
//!    malformed value is reported by whoever needs it rather than dropped at
//!    load time.
//!
//! 3. **Explicit datatypes** - Plain strings use `xsd:string`, language-tagged
//!    strings use `rdf:langString`.
//!
//! # Example
//!
//! ```
//! use stanbol_graph_ir::{Term, Triple};
//!
//! let triple = Triple::new(
//!     Term::iri("http://dbpedia.org/resource/Paris"),
//!     Term::iri("http://www.w3.org/2000/01/rdf-schema#label"),
//!     Term::lang_string("Paris", "en"),
//! );
//! assert_eq!(triple.o.as_literal().and_then(|l| l.language()), Some("en"));
//! ```

pub mod datatype;
mod term;
mod triple;

pub use datatype::Datatype;
pub use term::{BlankId, Literal, Term};
pub use triple::Triple;
