//! The annotation graph
//!
//! An [`AnnotationGraph`] owns every parsed [`Enhancement`] in an arena
//! addressed by [`EnhancementId`]. Lookup indexes (URI, entity, entity URI to
//! annotations, text annotation to entity annotations) are maintained as nodes
//! are added, so all views below are read-only and cheap.
//!
//! Graphs are only constructed by [`parse_enhancements`](crate::parse_enhancements)
//! and are immutable once returned.

use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::model::{Enhancement, EnhancementId, EnhancementType, Entity};

/// Parsed enhancement structure with derived views
#[derive(Debug, Default)]
pub struct AnnotationGraph {
    nodes: Vec<Enhancement>,
    by_uri: FxHashMap<Arc<str>, EnhancementId>,
    languages: BTreeSet<Arc<str>>,
    entities: BTreeMap<Arc<str>, Arc<Entity>>,
    /// Entity URI -> entity annotations suggesting it, in arena order
    by_entity: FxHashMap<Arc<str>, Vec<EnhancementId>>,
    /// Relation target -> entity annotations relating to it, in arena order.
    /// Targets of any type are indexed; views filter to text annotations.
    entities_for_text: FxHashMap<EnhancementId, Vec<EnhancementId>>,
}

impl AnnotationGraph {
    pub(crate) fn new(languages: BTreeSet<Arc<str>>) -> Self {
        Self {
            languages,
            ..Default::default()
        }
    }

    /// Add a fully resolved node. Nodes must be added in handle order, and
    /// relation targets must already be in the arena or be added later before
    /// the graph is handed out.
    pub(crate) fn add(&mut self, enhancement: Enhancement) {
        let id = enhancement.id();
        debug_assert_eq!(id.index(), self.nodes.len());

        if let Some(uri) = &enhancement.uri {
            self.by_uri.insert(uri.clone(), id);
        }
        if let Some(ea) = enhancement.as_entity() {
            if let Some(entity) = &ea.entity {
                self.entities
                    .entry(entity.uri_arc().clone())
                    .or_insert_with(|| entity.clone());
                self.by_entity
                    .entry(entity.uri_arc().clone())
                    .or_default()
                    .push(id);
            }
            for target in enhancement.relation_ids() {
                self.entities_for_text.entry(target).or_default().push(id);
            }
        }
        self.nodes.push(enhancement);
    }

    /// Every enhancement, by descending confidence (unknown last, ties in
    /// arena order)
    pub fn all_enhancements(&self) -> Vec<&Enhancement> {
        let mut all: Vec<_> = self.nodes.iter().collect();
        all.sort_by(|a, b| a.cmp_by_confidence(b));
        all
    }

    /// Enhancements in arena (parse) order
    pub fn iter(&self) -> impl Iterator<Item = &Enhancement> {
        self.nodes.iter()
    }

    pub fn get(&self, id: EnhancementId) -> Option<&Enhancement> {
        self.nodes.get(id.index())
    }

    /// Enhancement with the given URI
    pub fn by_uri(&self, uri: &str) -> Option<&Enhancement> {
        self.by_uri.get(uri).and_then(|&id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn of_type(&self, ty: EnhancementType) -> impl Iterator<Item = &Enhancement> {
        self.nodes
            .iter()
            .filter(move |e| e.enhancement_type() == ty)
    }

    pub fn text_annotations(&self) -> impl Iterator<Item = &Enhancement> {
        self.of_type(EnhancementType::Text)
    }

    pub fn entity_annotations(&self) -> impl Iterator<Item = &Enhancement> {
        self.of_type(EnhancementType::Entity)
    }

    pub fn topic_annotations(&self) -> impl Iterator<Item = &Enhancement> {
        self.of_type(EnhancementType::Topic)
    }

    pub fn keyword_annotations(&self) -> impl Iterator<Item = &Enhancement> {
        self.of_type(EnhancementType::Keyword)
    }

    pub fn sentiment_annotations(&self) -> impl Iterator<Item = &Enhancement> {
        self.of_type(EnhancementType::Sentiment)
    }

    /// Language tags detected in the content
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.as_ref())
    }

    /// Entities referenced by entity annotations, by URI
    pub fn entities(&self) -> impl Iterator<Item = &Arc<Entity>> {
        self.entities.values()
    }

    pub fn entity(&self, uri: &str) -> Option<&Arc<Entity>> {
        self.entities.get(uri)
    }

    /// Every entity annotation suggesting the entity `uri`, in parse order
    pub fn entity_annotations_by_entity_uri(&self, uri: &str) -> Vec<&Enhancement> {
        self.resolve_ids(self.by_entity.get(uri))
    }

    /// Highest-confidence entity annotation suggesting the entity `uri`
    ///
    /// Ties go to the annotation parsed first.
    pub fn entity_annotation_by_entity_uri(&self, uri: &str) -> Option<&Enhancement> {
        best(self.entity_annotations_by_entity_uri(uri))
    }

    /// Entities suggested by at least one entity annotation with
    /// `confidence >= threshold`
    pub fn entities_above_confidence(&self, threshold: f64) -> Vec<&Arc<Entity>> {
        self.entities
            .iter()
            .filter(|(uri, _)| {
                self.entity_annotations_by_entity_uri(uri)
                    .iter()
                    .any(|ea| ea.is_confident(threshold))
            })
            .map(|(_, entity)| entity)
            .collect()
    }

    pub fn entity_annotations_above_confidence(&self, threshold: f64) -> Vec<&Enhancement> {
        self.entity_annotations()
            .filter(|e| e.is_confident(threshold))
            .collect()
    }

    pub fn text_annotations_above_confidence(&self, threshold: f64) -> Vec<&Enhancement> {
        self.text_annotations()
            .filter(|e| e.is_confident(threshold))
            .collect()
    }

    pub fn topic_annotations_above_confidence(&self, threshold: f64) -> Vec<&Enhancement> {
        self.topic_annotations()
            .filter(|e| e.is_confident(threshold))
            .collect()
    }

    /// Enhancements `enhancement` relates to, in handle order
    pub fn relations<'a>(
        &'a self,
        enhancement: &'a Enhancement,
    ) -> impl Iterator<Item = &'a Enhancement> + 'a {
        enhancement.relation_ids().filter_map(move |id| self.get(id))
    }

    /// Entity annotations whose relations contain `text_annotation`
    ///
    /// Empty for anything that is not a text annotation of this graph.
    pub fn entity_annotations_for(&self, text_annotation: &Enhancement) -> Vec<&Enhancement> {
        if text_annotation.enhancement_type() != EnhancementType::Text {
            return Vec::new();
        }
        match self.member_id(text_annotation) {
            Some(id) => self.resolve_ids(self.entities_for_text.get(&id)),
            None => Vec::new(),
        }
    }

    /// Text annotations an entity annotation relates to
    pub fn text_annotations_for(&self, entity_annotation: &Enhancement) -> Vec<&Enhancement> {
        if entity_annotation.enhancement_type() != EnhancementType::Entity
            || self.member_id(entity_annotation).is_none()
        {
            return Vec::new();
        }
        entity_annotation
            .relation_ids()
            .filter_map(|id| self.get(id))
            .filter(|e| e.enhancement_type() == EnhancementType::Text)
            .collect()
    }

    /// For every text annotation with at least one related entity annotation,
    /// the related entity annotation with the highest confidence
    ///
    /// Text annotations without entity annotations are absent. Ties go to the
    /// entity annotation parsed first.
    pub fn best_annotation_per_text(&self) -> BTreeMap<EnhancementId, &Enhancement> {
        self.text_annotations()
            .filter_map(|ta| {
                let candidates = self.resolve_ids(self.entities_for_text.get(&ta.id()));
                best(candidates).map(|ea| (ta.id(), ea))
            })
            .collect()
    }

    /// Polarity of the document-level sentiment annotation, if any
    pub fn document_sentiment(&self) -> Option<f64> {
        self.sentiment_annotations()
            .filter_map(Enhancement::as_sentiment)
            .find(|s| s.is_document_level())
            .map(|s| s.sentiment)
    }

    /// Handle of `enhancement` if it belongs to this graph
    fn member_id(&self, enhancement: &Enhancement) -> Option<EnhancementId> {
        let id = enhancement.id();
        self.get(id)
            .filter(|own| *own == enhancement)
            .map(|_| id)
    }

    fn resolve_ids(&self, ids: Option<&Vec<EnhancementId>>) -> Vec<&Enhancement> {
        ids.into_iter()
            .flatten()
            .filter_map(|&id| self.get(id))
            .collect()
    }
}

/// First enhancement with maximal confidence
fn best<'a>(candidates: impl IntoIterator<Item = &'a Enhancement>) -> Option<&'a Enhancement> {
    candidates
        .into_iter()
        .reduce(|top, e| if e.cmp_by_confidence(top).is_lt() { e } else { top })
}
