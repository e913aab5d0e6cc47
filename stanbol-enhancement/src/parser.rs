//! Parse entry points
//!
//! A parse runs against one read-scoped store reader:
//!
//! 1. collect language annotations,
//! 2. discover nodes of every enhancement type,
//! 3. resolve relation targets breadth-first and link relations,
//! 4. dereference suggested entities and build the graph.
//!
//! Any error aborts the parse; the reader is released on every exit path.

use stanbol_store::{StoreReader, TripleStore};

use crate::dereference::EntityDereferencer;
use crate::error::Result;
use crate::factory::{AnnotationFactory, Registry};
use crate::graph::AnnotationGraph;
use crate::model::{EnhancementKind, EnhancementType};
use crate::options::ParseOptions;
use crate::queries::{self, Subject};
use crate::resolver::ResolutionContext;

/// Parse the enhancement structure held by `store` with default options
pub fn create_annotation_graph<S: TripleStore>(store: &S) -> Result<AnnotationGraph> {
    parse_enhancements(store, &ParseOptions::default())
}

/// Parse the enhancement structure held by `store`
pub fn parse_enhancements<S: TripleStore>(
    store: &S,
    options: &ParseOptions,
) -> Result<AnnotationGraph> {
    let span = tracing::debug_span!(
        "parse_enhancements",
        enhancements = tracing::field::Empty,
        entities = tracing::field::Empty,
    );
    let _guard = span.enter();

    let reader = store.reader()?;
    let graph = parse_reader(&reader, options)?;

    span.record("enhancements", graph.len());
    span.record("entities", graph.entities().count());
    Ok(graph)
}

/// Parse through an already acquired reader
pub fn parse_reader<R: StoreReader>(reader: &R, options: &ParseOptions) -> Result<AnnotationGraph> {
    let mut registry = Registry::default();

    let language_rows = reader.select(&queries::language_query())?;
    let mut factory = AnnotationFactory::new(&mut registry);
    for row in &language_rows {
        factory.language_row(row)?;
    }

    for ty in EnhancementType::ALL {
        let rows = reader.select(&queries::discovery_query(ty, Subject::Any))?;
        for row in &rows {
            factory.enhancement_row(ty, Subject::Any, row)?;
        }
        tracing::debug!(ty = %ty, rows = rows.len(), "discovered enhancements");
    }

    ResolutionContext::new(reader, options, &mut registry).resolve()?;

    let mut dereferencer = EntityDereferencer::new(reader, options.dereference_entities);
    let Registry {
        nodes, languages, ..
    } = registry;
    let mut graph = AnnotationGraph::new(languages);
    for staged in nodes {
        let mut enhancement = staged.enhancement;
        if let EnhancementKind::Entity(ea) = &mut enhancement.kind {
            if let Some(reference) = &ea.entity_reference {
                ea.entity = Some(dereferencer.dereference(reference)?);
            }
        }
        graph.add(enhancement);
    }
    tracing::debug!(
        enhancements = graph.len(),
        entities = dereferencer.len(),
        "built annotation graph"
    );
    Ok(graph)
}
