//! Enhancement nodes
//!
//! An [`Enhancement`] holds the fields shared by every annotation and an
//! [`EnhancementKind`] with the variant-specific ones. Nodes live in the arena
//! of an [`AnnotationGraph`](crate::AnnotationGraph) and refer to each other by
//! [`EnhancementId`].

use crate::model::Entity;
use chrono::{DateTime, Utc};
use stanbol_vocab::fise;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Stable handle of an enhancement within one annotation graph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnhancementId(pub(crate) u32);

impl EnhancementId {
    /// Position of the node in its graph's arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EnhancementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Enhancement variant discriminant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnhancementType {
    Text,
    Entity,
    Topic,
    Keyword,
    Sentiment,
}

impl EnhancementType {
    /// All variants, in the order a response is parsed
    pub const ALL: [EnhancementType; 5] = [
        EnhancementType::Text,
        EnhancementType::Entity,
        EnhancementType::Topic,
        EnhancementType::Keyword,
        EnhancementType::Sentiment,
    ];

    /// The `fise:` class IRI of this variant
    pub fn class_iri(self) -> &'static str {
        match self {
            EnhancementType::Text => fise::TEXT_ANNOTATION,
            EnhancementType::Entity => fise::ENTITY_ANNOTATION,
            EnhancementType::Topic => fise::TOPIC_ANNOTATION,
            EnhancementType::Keyword => fise::KEYWORD_ANNOTATION,
            EnhancementType::Sentiment => fise::SENTIMENT_ANNOTATION,
        }
    }

    /// Whether a node of this variant must carry `fise:confidence`
    pub fn requires_confidence(self) -> bool {
        matches!(
            self,
            EnhancementType::Text | EnhancementType::Entity | EnhancementType::Topic
        )
    }
}

impl std::fmt::Display for EnhancementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EnhancementType::Text => "TextAnnotation",
            EnhancementType::Entity => "EntityAnnotation",
            EnhancementType::Topic => "TopicAnnotation",
            EnhancementType::Keyword => "KeywordAnnotation",
            EnhancementType::Sentiment => "SentimentAnnotation",
        };
        f.write_str(name)
    }
}

/// A marked span of the analyzed text
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextAnnotation {
    /// Character offset of the first selected character
    pub start: Option<usize>,
    /// Character offset after the last selected character (`end > start`)
    pub end: Option<usize>,
    pub selected_text: Option<Arc<str>>,
    pub selection_context: Option<Arc<str>>,
    /// Linguistic classification (`dcterms:type`), e.g. a named-entity class
    pub text_type: Option<Arc<str>>,
}

impl TextAnnotation {
    /// Length of the span, when both offsets are known
    pub fn span_len(&self) -> Option<usize> {
        Some(self.end?.saturating_sub(self.start?))
    }
}

/// A candidate entity for a span
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityAnnotation {
    pub entity_label: Option<Arc<str>>,
    /// URI of the suggested entity (`fise:entity-reference`)
    pub entity_reference: Option<Arc<str>>,
    /// The dereferenced entity; set once the parse has fetched it
    pub entity: Option<Arc<Entity>>,
    /// Type URIs of the suggested entity (accumulated across rows)
    pub entity_types: BTreeSet<Arc<str>>,
    /// Referenced site the entity was found in (`entityhub:site`)
    pub site: Option<Arc<str>>,
}

/// A thematic classification of the content
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopicAnnotation {
    pub topic_label: Option<Arc<str>>,
    /// URI of the topic concept; not dereferenced
    pub topic_reference: Option<Arc<str>>,
    pub types: BTreeSet<Arc<str>>,
    pub site: Option<Arc<str>>,
}

/// An extracted keyword
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeywordAnnotation {
    pub keyword: Option<Arc<str>>,
    /// Number of occurrences in the content
    pub count: Option<u64>,
    /// Relevance metric as computed by the extracting engine
    pub metric: Option<f64>,
}

/// A sentiment score for a span, or for the whole document when unscoped
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SentimentAnnotation {
    /// Polarity in [-1, 1]
    pub sentiment: f64,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl SentimentAnnotation {
    /// True if the sentiment applies to the whole document
    pub fn is_document_level(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Variant-specific enhancement fields
#[derive(Clone, Debug, PartialEq)]
pub enum EnhancementKind {
    Text(TextAnnotation),
    Entity(EntityAnnotation),
    Topic(TopicAnnotation),
    Keyword(KeywordAnnotation),
    Sentiment(SentimentAnnotation),
}

impl EnhancementKind {
    /// Empty fields for a new node of the given type
    pub(crate) fn empty(ty: EnhancementType) -> Self {
        match ty {
            EnhancementType::Text => EnhancementKind::Text(TextAnnotation::default()),
            EnhancementType::Entity => EnhancementKind::Entity(EntityAnnotation::default()),
            EnhancementType::Topic => EnhancementKind::Topic(TopicAnnotation::default()),
            EnhancementType::Keyword => EnhancementKind::Keyword(KeywordAnnotation::default()),
            EnhancementType::Sentiment => {
                EnhancementKind::Sentiment(SentimentAnnotation::default())
            }
        }
    }

    pub fn enhancement_type(&self) -> EnhancementType {
        match self {
            EnhancementKind::Text(_) => EnhancementType::Text,
            EnhancementKind::Entity(_) => EnhancementType::Entity,
            EnhancementKind::Topic(_) => EnhancementType::Topic,
            EnhancementKind::Keyword(_) => EnhancementType::Keyword,
            EnhancementKind::Sentiment(_) => EnhancementType::Sentiment,
        }
    }
}

/// A parsed annotation node
///
/// # Identity
///
/// Enhancements with a URI are equal when their URIs are equal. Enhancements
/// without one (blank-node subjects) are equal only to themselves, compared by
/// arena handle.
///
/// # Ordering
///
/// [`Enhancement::cmp_by_confidence`] orders by descending confidence, with
/// unknown confidence last. Equal confidences compare as a tie.
#[derive(Clone, Debug)]
pub struct Enhancement {
    pub(crate) id: EnhancementId,
    pub(crate) uri: Option<Arc<str>>,
    pub(crate) confidence: Option<f64>,
    pub(crate) language: Option<Arc<str>>,
    pub(crate) created: Option<DateTime<Utc>>,
    pub(crate) creator: Option<Arc<str>>,
    pub(crate) extracted_from: Option<Arc<str>>,
    pub(crate) relations: BTreeSet<EnhancementId>,
    pub(crate) kind: EnhancementKind,
}

impl Enhancement {
    pub(crate) fn new(id: EnhancementId, uri: Option<Arc<str>>, ty: EnhancementType) -> Self {
        Self {
            id,
            uri,
            confidence: None,
            language: None,
            created: None,
            creator: None,
            extracted_from: None,
            relations: BTreeSet::new(),
            kind: EnhancementKind::empty(ty),
        }
    }

    pub fn id(&self) -> EnhancementId {
        self.id
    }

    /// The node's IRI; `None` for blank-node enhancements
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Confidence in [0, 1]
    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    /// The engine that produced this enhancement
    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    /// The content item the enhancement was extracted from
    pub fn extracted_from(&self) -> Option<&str> {
        self.extracted_from.as_deref()
    }

    /// Handles of the related enhancements
    pub fn relation_ids(&self) -> impl Iterator<Item = EnhancementId> + '_ {
        self.relations.iter().copied()
    }

    pub fn relates_to(&self, other: EnhancementId) -> bool {
        self.relations.contains(&other)
    }

    pub fn kind(&self) -> &EnhancementKind {
        &self.kind
    }

    pub fn enhancement_type(&self) -> EnhancementType {
        self.kind.enhancement_type()
    }

    pub fn as_text(&self) -> Option<&TextAnnotation> {
        match &self.kind {
            EnhancementKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&EntityAnnotation> {
        match &self.kind {
            EnhancementKind::Entity(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_topic(&self) -> Option<&TopicAnnotation> {
        match &self.kind {
            EnhancementKind::Topic(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> Option<&KeywordAnnotation> {
        match &self.kind {
            EnhancementKind::Keyword(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_sentiment(&self) -> Option<&SentimentAnnotation> {
        match &self.kind {
            EnhancementKind::Sentiment(s) => Some(s),
            _ => None,
        }
    }

    /// True if the confidence is known and at least `threshold`
    pub fn is_confident(&self, threshold: f64) -> bool {
        self.confidence.is_some_and(|c| c >= threshold)
    }

    /// Descending confidence, unknown confidence last
    pub fn cmp_by_confidence(&self, other: &Self) -> Ordering {
        match (self.confidence, other.confidence) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialEq for Enhancement {
    fn eq(&self, other: &Self) -> bool {
        match (&self.uri, &other.uri) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.id == other.id,
            _ => false,
        }
    }
}

impl Eq for Enhancement {}

impl Hash for Enhancement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.uri {
            Some(uri) => uri.hash(state),
            None => self.id.hash(state),
        }
    }
}
