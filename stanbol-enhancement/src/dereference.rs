//! Entity dereferencing
//!
//! Folds every `(uri, ?p, ?o)` statement into an [`Entity`]. Results are
//! memoized per parse, since several entity annotations usually suggest the
//! same entity.

use rustc_hash::FxHashMap;
use stanbol_graph_ir::Term;
use stanbol_store::StoreReader;
use std::sync::Arc;

use crate::error::Result;
use crate::model::Entity;
use crate::queries::{self, vars};

/// Build an entity from `(predicate, object)` pairs.
///
/// Language-tagged literals are stored under their tag; plain and typed
/// literals, IRIs and blank nodes are stored under the no-language key.
pub fn entity_from_statements<'a>(
    uri: &str,
    statements: impl IntoIterator<Item = (&'a Term, &'a Term)>,
) -> Entity {
    let mut entity = Entity::new(uri);
    for (predicate, object) in statements {
        let language = object.as_literal().and_then(|l| l.language());
        entity.add_value(predicate.value(), language, object.value());
    }
    entity
}

/// Memoizing entity fetcher bound to one store reader
pub(crate) struct EntityDereferencer<'r, R> {
    reader: &'r R,
    enabled: bool,
    cache: FxHashMap<Arc<str>, Arc<Entity>>,
}

impl<'r, R: StoreReader> EntityDereferencer<'r, R> {
    /// When `enabled` is false, entities carry only their URI
    pub(crate) fn new(reader: &'r R, enabled: bool) -> Self {
        Self {
            reader,
            enabled,
            cache: FxHashMap::default(),
        }
    }

    pub(crate) fn dereference(&mut self, uri: &Arc<str>) -> Result<Arc<Entity>> {
        if let Some(entity) = self.cache.get(uri) {
            return Ok(entity.clone());
        }

        let entity = if self.enabled {
            let rows = self.reader.select(&queries::describe(uri))?;
            let statements = rows.iter().filter_map(|row| {
                Some((row.get(vars::PREDICATE)?, row.get(vars::OBJECT)?))
            });
            let entity = entity_from_statements(uri, statements);
            tracing::trace!(uri = %uri, statements = rows.len(), "dereferenced entity");
            entity
        } else {
            Entity::new(uri.as_ref())
        };

        let entity = Arc::new(entity);
        self.cache.insert(uri.clone(), entity.clone());
        Ok(entity)
    }

    /// Number of distinct entities fetched so far
    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stanbol_graph_ir::Triple;
    use stanbol_store::{MemoryStore, TripleStore};
    use stanbol_vocab::{rdf, rdfs};

    const PARIS: &str = "http://dbpedia.org/resource/Paris";
    const PLACE: &str = "http://dbpedia.org/ontology/Place";

    fn store() -> MemoryStore {
        let paris = Term::iri(PARIS);
        [
            Triple::new(paris.clone(), Term::iri(rdfs::LABEL), Term::lang_string("Paris", "en")),
            Triple::new(paris.clone(), Term::iri(rdfs::LABEL), Term::lang_string("Parigi", "it")),
            Triple::new(paris.clone(), Term::iri(rdf::TYPE), Term::iri(PLACE)),
            Triple::new(
                paris,
                Term::iri("http://dbpedia.org/ontology/populationTotal"),
                Term::int(2_165_423),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_statements_fold_by_language() {
        let store = store();
        let reader = store.reader().unwrap();
        let mut deref = EntityDereferencer::new(&reader, true);
        let paris = deref.dereference(&Arc::from(PARIS)).unwrap();

        assert_eq!(paris.value(rdfs::LABEL, Some("en")), Some("Paris"));
        assert_eq!(paris.value(rdfs::LABEL, Some("it")), Some("Parigi"));
        assert!(paris.values(rdf::TYPE).contains(PLACE));
        assert_eq!(
            paris.value("http://dbpedia.org/ontology/populationTotal", None),
            Some("2165423")
        );
    }

    #[test]
    fn test_results_are_memoized() {
        let store = store();
        let reader = store.reader().unwrap();
        let mut deref = EntityDereferencer::new(&reader, true);
        let uri = Arc::from(PARIS);
        let first = deref.dereference(&uri).unwrap();
        let second = deref.dereference(&uri).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(deref.len(), 1);
    }

    #[test]
    fn test_disabled_keeps_only_the_uri() {
        let store = store();
        let reader = store.reader().unwrap();
        let mut deref = EntityDereferencer::new(&reader, false);
        let paris = deref.dereference(&Arc::from(PARIS)).unwrap();
        assert_eq!(paris.uri(), PARIS);
        assert!(paris.is_empty());
    }

    #[test]
    fn test_unknown_uri_yields_empty_entity() {
        let store = store();
        let reader = store.reader().unwrap();
        let mut deref = EntityDereferencer::new(&reader, true);
        let nowhere = deref
            .dereference(&Arc::from("http://dbpedia.org/resource/Nowhere"))
            .unwrap();
        assert!(nowhere.is_empty());
    }
}
