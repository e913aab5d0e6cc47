//! Enhancement structure parsing
//!
//! Reconstructs the RDF enhancement structure returned by a text analysis
//! service into a typed, navigable [`AnnotationGraph`]: text spans, entity
//! suggestions with their dereferenced entities, topics, keywords, sentiment,
//! confidences and the relations between them.
//!
//! The parser reads through the [`stanbol_store::TripleStore`] abstraction and
//! never sees the wire format. A parse either returns a complete graph or an
//! [`EnhancementError`]; partially parsed graphs are never exposed.
//!
//! # Example
//!
//! ```
//! use stanbol_enhancement::{create_annotation_graph, EnhancementType};
//! use stanbol_graph_ir::{Term, Triple};
//! use stanbol_store::MemoryStore;
//! use stanbol_vocab::{dcterms, fise, rdf};
//!
//! let ta = Term::iri("urn:enhancement:ta1");
//! let ea = Term::iri("urn:enhancement:ea1");
//! let store: MemoryStore = [
//!     Triple::new(ta.clone(), Term::iri(rdf::TYPE), Term::iri(fise::TEXT_ANNOTATION)),
//!     Triple::new(ta.clone(), Term::iri(fise::CONFIDENCE), Term::double(1.0)),
//!     Triple::new(ta.clone(), Term::iri(fise::SELECTED_TEXT), Term::string("Paris")),
//!     Triple::new(ea.clone(), Term::iri(rdf::TYPE), Term::iri(fise::ENTITY_ANNOTATION)),
//!     Triple::new(ea.clone(), Term::iri(fise::CONFIDENCE), Term::double(0.9)),
//!     Triple::new(ea.clone(), Term::iri(dcterms::RELATION), ta),
//!     Triple::new(
//!         ea,
//!         Term::iri(fise::ENTITY_REFERENCE),
//!         Term::iri("http://dbpedia.org/resource/Paris"),
//!     ),
//! ]
//! .into_iter()
//! .collect();
//!
//! let graph = create_annotation_graph(&store).unwrap();
//! assert_eq!(graph.len(), 2);
//!
//! let best = graph.best_annotation_per_text();
//! let (_, suggestion) = best.iter().next().unwrap();
//! assert_eq!(suggestion.enhancement_type(), EnhancementType::Entity);
//! assert_eq!(
//!     suggestion.as_entity().and_then(|ea| ea.entity_reference.as_deref()),
//!     Some("http://dbpedia.org/resource/Paris")
//! );
//! ```

mod dereference;
pub mod error;
mod factory;
mod graph;
pub mod model;
pub mod options;
mod parser;
mod queries;
mod resolver;

pub use dereference::entity_from_statements;
pub use error::{EnhancementError, Result};
pub use graph::AnnotationGraph;
pub use model::{
    Enhancement, EnhancementId, EnhancementKind, EnhancementType, Entity, EntityAnnotation,
    KeywordAnnotation, LanguageKey, SentimentAnnotation, TextAnnotation, TopicAnnotation,
};
pub use options::{DanglingRelationPolicy, ParseOptions};
pub use parser::{create_annotation_graph, parse_enhancements, parse_reader};
