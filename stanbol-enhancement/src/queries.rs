//! Query templates
//!
//! Every read the parser performs is one of these shapes. Discovery templates
//! are parameterized by [`Subject`]: a free variable to find all nodes of a
//! type, or a bound node to parse one relation target.

use stanbol_graph_ir::Term;
use stanbol_store::{AskQuery, PatternTerm, SelectQuery, TriplePattern, Var};
use stanbol_vocab::{dcterms, entityhub, fise};

use crate::model::EnhancementType;

/// Variable names bound by the templates
pub(crate) mod vars {
    pub const NODE: &str = "e";
    pub const CONFIDENCE: &str = "confidence";
    pub const LANGUAGE: &str = "language";
    pub const CREATED: &str = "created";
    pub const CREATOR: &str = "creator";
    pub const EXTRACTED_FROM: &str = "extractedFrom";
    pub const RELATION: &str = "relation";

    pub const TYPE: &str = "type";
    pub const START: &str = "start";
    pub const END: &str = "end";
    pub const SELECTED_TEXT: &str = "selectedText";
    pub const SELECTION_CONTEXT: &str = "selectionContext";

    pub const LABEL: &str = "label";
    pub const REFERENCE: &str = "reference";
    pub const ENTITY_TYPE: &str = "entityType";
    pub const SITE: &str = "site";

    pub const KEYWORD: &str = "keyword";
    pub const COUNT: &str = "count";
    pub const METRIC: &str = "metric";
    pub const SENTIMENT: &str = "sentiment";

    pub const PREDICATE: &str = "p";
    pub const OBJECT: &str = "o";
}

/// Subject of a discovery template
#[derive(Clone, Copy, Debug)]
pub(crate) enum Subject<'a> {
    /// All nodes of the template's type
    Any,
    /// One node, by resource key (IRI or `_:label`)
    Bound(&'a str),
}

impl Subject<'_> {
    fn term(self) -> PatternTerm {
        match self {
            Subject::Any => Var::new(vars::NODE).into(),
            Subject::Bound(key) => Term::from_resource_key(key).into(),
        }
    }
}

fn var(name: &str) -> Var {
    Var::new(name)
}

fn iri(iri: &str) -> Term {
    Term::iri(iri)
}

/// `?e a <class>` plus the optional fields every enhancement may carry.
///
/// Confidence is optional here even where it is mandatory, so a node missing
/// it is reported as malformed instead of silently not matching.
fn base_query(subject: Subject<'_>, ty: EnhancementType) -> SelectQuery {
    let s = subject.term();
    SelectQuery::new()
        .pattern(TriplePattern::typed(s.clone(), ty.class_iri()))
        .optional(TriplePattern::new(
            s.clone(),
            iri(fise::CONFIDENCE),
            var(vars::CONFIDENCE),
        ))
        .optional(TriplePattern::new(s.clone(), iri(dcterms::LANGUAGE), var(vars::LANGUAGE)))
        .optional(TriplePattern::new(s.clone(), iri(dcterms::CREATED), var(vars::CREATED)))
        .optional(TriplePattern::new(s.clone(), iri(dcterms::CREATOR), var(vars::CREATOR)))
        .optional(TriplePattern::new(
            s.clone(),
            iri(fise::EXTRACTED_FROM),
            var(vars::EXTRACTED_FROM),
        ))
        .optional(TriplePattern::new(s, iri(dcterms::RELATION), var(vars::RELATION)))
}

/// Discovery template for one enhancement type
pub(crate) fn discovery_query(ty: EnhancementType, subject: Subject<'_>) -> SelectQuery {
    match ty {
        EnhancementType::Text => text_annotation_query(subject),
        EnhancementType::Entity => entity_annotation_query(subject),
        EnhancementType::Topic => topic_annotation_query(subject),
        EnhancementType::Keyword => keyword_annotation_query(subject),
        EnhancementType::Sentiment => sentiment_annotation_query(subject),
    }
}

/// Language annotations: text annotations typed `dcterms:LinguisticSystem`
pub(crate) fn language_query() -> SelectQuery {
    let s = Subject::Any.term();
    SelectQuery::new()
        .pattern(TriplePattern::typed(s.clone(), fise::TEXT_ANNOTATION))
        .pattern(TriplePattern::new(
            s.clone(),
            iri(dcterms::TYPE),
            iri(dcterms::LINGUISTIC_SYSTEM),
        ))
        .pattern(TriplePattern::new(s, iri(dcterms::LANGUAGE), var(vars::LANGUAGE)))
}

pub(crate) fn text_annotation_query(subject: Subject<'_>) -> SelectQuery {
    let s = subject.term();
    base_query(subject, EnhancementType::Text)
        .optional(TriplePattern::new(s.clone(), iri(dcterms::TYPE), var(vars::TYPE)))
        .optional(TriplePattern::new(s.clone(), iri(fise::START), var(vars::START)))
        .optional(TriplePattern::new(s.clone(), iri(fise::END), var(vars::END)))
        .optional(TriplePattern::new(
            s.clone(),
            iri(fise::SELECTION_CONTEXT),
            var(vars::SELECTION_CONTEXT),
        ))
        .optional(TriplePattern::new(
            s,
            iri(fise::SELECTED_TEXT),
            var(vars::SELECTED_TEXT),
        ))
}

pub(crate) fn entity_annotation_query(subject: Subject<'_>) -> SelectQuery {
    referencing_query(subject, EnhancementType::Entity)
}

pub(crate) fn topic_annotation_query(subject: Subject<'_>) -> SelectQuery {
    referencing_query(subject, EnhancementType::Topic)
}

/// Entity and topic annotations share label/reference/type/site fields
fn referencing_query(subject: Subject<'_>, ty: EnhancementType) -> SelectQuery {
    let s = subject.term();
    base_query(subject, ty)
        .optional(TriplePattern::new(s.clone(), iri(fise::ENTITY_LABEL), var(vars::LABEL)))
        .optional(TriplePattern::new(
            s.clone(),
            iri(fise::ENTITY_REFERENCE),
            var(vars::REFERENCE),
        ))
        .optional(TriplePattern::new(
            s.clone(),
            iri(fise::ENTITY_TYPE),
            var(vars::ENTITY_TYPE),
        ))
        .optional(TriplePattern::new(s, iri(entityhub::SITE), var(vars::SITE)))
}

pub(crate) fn keyword_annotation_query(subject: Subject<'_>) -> SelectQuery {
    let s = subject.term();
    base_query(subject, EnhancementType::Keyword)
        .optional(TriplePattern::new(s.clone(), iri(fise::KEYWORD), var(vars::KEYWORD)))
        .optional(TriplePattern::new(s.clone(), iri(fise::COUNT), var(vars::COUNT)))
        .optional(TriplePattern::new(s, iri(fise::METRIC), var(vars::METRIC)))
}

pub(crate) fn sentiment_annotation_query(subject: Subject<'_>) -> SelectQuery {
    let s = subject.term();
    base_query(subject, EnhancementType::Sentiment)
        .optional(TriplePattern::new(s.clone(), iri(fise::SENTIMENT), var(vars::SENTIMENT)))
        .optional(TriplePattern::new(s.clone(), iri(fise::START), var(vars::START)))
        .optional(TriplePattern::new(s, iri(fise::END), var(vars::END)))
}

/// `ASK { <key> a fise:EntityAnnotation }`
pub(crate) fn is_entity_annotation(key: &str) -> AskQuery {
    AskQuery::new(TriplePattern::typed(
        Term::from_resource_key(key),
        fise::ENTITY_ANNOTATION,
    ))
}

/// `SELECT ?p ?o { <uri> ?p ?o }`
pub(crate) fn describe(uri: &str) -> SelectQuery {
    SelectQuery::new().pattern(TriplePattern::new(
        Term::from_resource_key(uri),
        var(vars::PREDICATE),
        var(vars::OBJECT),
    ))
}
