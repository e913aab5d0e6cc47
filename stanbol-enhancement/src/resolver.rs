//! Relation resolution
//!
//! Relation targets are not guaranteed to be among the nodes found by the
//! type-scoped discovery queries. The resolver expands them breadth-first:
//!
//! 1. Seed the work queue with every relation target discovered so far that
//!    is not already a node.
//! 2. Pop a key. Skip it if it resolved in the meantime; otherwise classify it
//!    with an `ASK` for `fise:EntityAnnotation` and parse it with the entity or
//!    text template bound to that key.
//! 3. Push any relation targets the new node declares, unless already resolved
//!    or queued. Cyclic relation graphs therefore terminate.
//! 4. When the queue is empty, link every node's relation keys to node handles,
//!    applying the [`DanglingRelationPolicy`] to keys that never resolved.
//!
//! Each key moves `unseen -> queued -> resolved` at most once. A failed store
//! query aborts the whole pass.

use rustc_hash::FxHashSet;
use stanbol_store::StoreReader;
use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use crate::error::{EnhancementError, Result};
use crate::factory::{AnnotationFactory, Registry};
use crate::model::EnhancementType;
use crate::options::{DanglingRelationPolicy, ParseOptions};
use crate::queries::{self, Subject};

/// State threaded through one resolution pass
pub(crate) struct ResolutionContext<'a, R> {
    reader: &'a R,
    options: &'a ParseOptions,
    registry: &'a mut Registry,
    queue: VecDeque<Arc<str>>,
    /// Every key ever enqueued; never shrinks
    queued: FxHashSet<Arc<str>>,
    steps: usize,
}

impl<'a, R: StoreReader> ResolutionContext<'a, R> {
    pub(crate) fn new(
        reader: &'a R,
        options: &'a ParseOptions,
        registry: &'a mut Registry,
    ) -> Self {
        Self {
            reader,
            options,
            registry,
            queue: VecDeque::new(),
            queued: FxHashSet::default(),
            steps: 0,
        }
    }

    /// Resolve all pending relation targets, then link relations
    pub(crate) fn resolve(mut self) -> Result<()> {
        let span = tracing::debug_span!(
            "resolve_relations",
            seeded = tracing::field::Empty,
            resolved = tracing::field::Empty,
        );
        let _guard = span.enter();

        self.enqueue_discovered();
        span.record("seeded", self.queue.len());

        let mut resolved = 0usize;
        while let Some(key) = self.queue.pop_front() {
            self.steps += 1;
            if let Some(limit) = self.options.max_resolution_steps {
                if self.steps > limit {
                    return Err(EnhancementError::ResolutionLimit(limit));
                }
            }
            if self.registry.is_resolved(&key) {
                continue;
            }
            if self.resolve_one(&key)? {
                resolved += 1;
            }
            self.enqueue_discovered();
        }
        span.record("resolved", resolved);

        self.link_relations()
    }

    /// Move newly discovered relation targets onto the queue
    fn enqueue_discovered(&mut self) {
        let discovered: Vec<Arc<str>> = self.registry.drain_discovered().collect();
        for key in discovered {
            if self.registry.is_resolved(&key) || self.queued.contains(&key) {
                continue;
            }
            self.queued.insert(key.clone());
            self.queue.push_back(key);
        }
    }

    /// Classify and parse one target. Returns false if nothing matched.
    fn resolve_one(&mut self, key: &Arc<str>) -> Result<bool> {
        let ty = if self.reader.ask(&queries::is_entity_annotation(key))? {
            EnhancementType::Entity
        } else {
            EnhancementType::Text
        };

        let subject = Subject::Bound(key);
        let rows = self.reader.select(&queries::discovery_query(ty, subject))?;
        let mut factory = AnnotationFactory::new(self.registry);
        for row in &rows {
            factory.enhancement_row(ty, subject, row)?;
        }

        let matched = self.registry.is_resolved(key);
        if matched {
            tracing::debug!(key = %key, ty = %ty, rows = rows.len(), "resolved relation target");
        } else {
            tracing::debug!(key = %key, "relation target is not an enhancement");
        }
        Ok(matched)
    }

    /// Replace relation keys by node handles
    fn link_relations(self) -> Result<()> {
        let Registry {
            nodes,
            by_key,
            language_nodes,
            ..
        } = self.registry;

        for staged in nodes.iter_mut() {
            let mut relations = BTreeSet::new();
            for target in &staged.relation_keys {
                if let Some(&id) = by_key.get(target) {
                    relations.insert(id);
                } else if language_nodes.contains(target) {
                    tracing::debug!(
                        from = %staged.key,
                        to = %target,
                        "ignoring relation to language annotation"
                    );
                } else {
                    match self.options.dangling_relations {
                        DanglingRelationPolicy::Drop => {
                            tracing::warn!(
                                from = %staged.key,
                                to = %target,
                                "dropping unresolved relation"
                            );
                        }
                        DanglingRelationPolicy::Fail => {
                            return Err(EnhancementError::UnresolvedRelation {
                                from: staged.key.clone(),
                                to: target.clone(),
                            });
                        }
                    }
                }
            }
            staged.enhancement.relations = relations;
        }
        Ok(())
    }
}
