//! Triple store adapter
//!
//! The enhancement parser never walks raw triples. It asks a store for
//! solutions to small graph patterns, the way a SPARQL endpoint would be asked
//! `SELECT` and `ASK` queries. This crate defines that capability
//! ([`TripleStore`], [`StoreReader`]) and ships an indexed in-memory
//! implementation ([`MemoryStore`]).
//!
//! # Example
//!
//! ```
//! use stanbol_graph_ir::{Term, Triple};
//! use stanbol_store::{MemoryStore, SelectQuery, StoreReader, TriplePattern, TripleStore, Var};
//!
//! let store: MemoryStore = [Triple::new(
//!     Term::iri("http://example.org/ta1"),
//!     Term::iri("http://fise.iks-project.eu/ontology/start"),
//!     Term::int(0),
//! )]
//! .into_iter()
//! .collect();
//!
//! let query = SelectQuery::new().pattern(TriplePattern::new(
//!     Var::new("s"),
//!     Term::iri("http://fise.iks-project.eu/ontology/start"),
//!     Var::new("start"),
//! ));
//!
//! let reader = store.reader().unwrap();
//! let rows = reader.select(&query).unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].iri("s"), Some("http://example.org/ta1"));
//! ```

pub mod error;
mod memory;
pub mod pattern;
pub mod query;
pub mod solution;

pub use error::{Result, StoreError};
pub use memory::{MemoryReader, MemoryStore};
pub use pattern::{PatternTerm, TriplePattern, Var};
pub use query::{AskQuery, SelectQuery};
pub use solution::Solution;

/// A collection of statements that can be queried by pattern.
///
/// Reads happen through a [`StoreReader`] obtained from [`TripleStore::reader`].
/// A reader sees one consistent snapshot for its whole lifetime and releases
/// the store when dropped.
pub trait TripleStore {
    type Reader<'a>: StoreReader
    where
        Self: 'a;

    /// Acquire a read-only view of the store.
    fn reader(&self) -> Result<Self::Reader<'_>>;
}

/// Read-only query access to one snapshot of a store
pub trait StoreReader {
    /// Evaluate a basic graph pattern with `OPTIONAL` groups.
    fn select(&self, query: &SelectQuery) -> Result<Vec<Solution>>;

    /// Test whether a basic graph pattern has at least one solution.
    fn ask(&self, query: &AskQuery) -> Result<bool>;
}
