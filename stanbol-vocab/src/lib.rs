//! RDF Vocabulary Constants for the Stanbol Enhancement Structure
//!
//! This crate provides a centralized location for the vocabulary IRIs used
//! when reading an enhancement response.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `dcterms` - Dublin Core terms (http://purl.org/dc/terms/)
//! - `fise` - Enhancement structure ontology (http://fise.iks-project.eu/ontology/)
//! - `entityhub` - Entityhub provenance (http://stanbol.apache.org/ontology/entityhub/entityhub#)

/// Namespace IRIs
pub mod namespaces {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const FISE: &str = "http://fise.iks-project.eu/ontology/";
    pub const ENTITYHUB: &str = "http://stanbol.apache.org/ontology/entityhub/entityhub#";
}

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// XSD datatypes that appear in enhancement responses
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// Dublin Core terms
pub mod dcterms {
    /// dcterms:relation - directed edge between two enhancements
    pub const RELATION: &str = "http://purl.org/dc/terms/relation";

    /// dcterms:language - language tag detected for the content
    pub const LANGUAGE: &str = "http://purl.org/dc/terms/language";

    /// dcterms:type - linguistic classification of a text annotation
    pub const TYPE: &str = "http://purl.org/dc/terms/type";

    /// dcterms:created - creation timestamp of an enhancement
    pub const CREATED: &str = "http://purl.org/dc/terms/created";

    /// dcterms:creator - the engine that produced an enhancement
    pub const CREATOR: &str = "http://purl.org/dc/terms/creator";

    /// dcterms:LinguisticSystem - marks a language annotation
    pub const LINGUISTIC_SYSTEM: &str = "http://purl.org/dc/terms/LinguisticSystem";
}

/// Enhancement structure ontology (`fise:`)
pub mod fise {
    // Classes

    /// fise:Enhancement - common super type of all annotations
    pub const ENHANCEMENT: &str = "http://fise.iks-project.eu/ontology/Enhancement";

    /// fise:TextAnnotation - a marked span of the analyzed text
    pub const TEXT_ANNOTATION: &str = "http://fise.iks-project.eu/ontology/TextAnnotation";

    /// fise:EntityAnnotation - a candidate entity for a span
    pub const ENTITY_ANNOTATION: &str = "http://fise.iks-project.eu/ontology/EntityAnnotation";

    /// fise:TopicAnnotation - a thematic classification of the content
    pub const TOPIC_ANNOTATION: &str = "http://fise.iks-project.eu/ontology/TopicAnnotation";

    /// fise:KeywordAnnotation - an extracted keyword with relevance metric
    pub const KEYWORD_ANNOTATION: &str =
        "http://fise.iks-project.eu/ontology/KeywordAnnotation";

    /// fise:SentimentAnnotation - a sentiment score for a span or the document
    pub const SENTIMENT_ANNOTATION: &str =
        "http://fise.iks-project.eu/ontology/SentimentAnnotation";

    // Properties

    pub const CONFIDENCE: &str = "http://fise.iks-project.eu/ontology/confidence";
    pub const EXTRACTED_FROM: &str = "http://fise.iks-project.eu/ontology/extracted-from";

    pub const START: &str = "http://fise.iks-project.eu/ontology/start";
    pub const END: &str = "http://fise.iks-project.eu/ontology/end";
    pub const SELECTED_TEXT: &str = "http://fise.iks-project.eu/ontology/selected-text";
    pub const SELECTION_CONTEXT: &str = "http://fise.iks-project.eu/ontology/selection-context";

    pub const ENTITY_LABEL: &str = "http://fise.iks-project.eu/ontology/entity-label";
    pub const ENTITY_REFERENCE: &str = "http://fise.iks-project.eu/ontology/entity-reference";
    pub const ENTITY_TYPE: &str = "http://fise.iks-project.eu/ontology/entity-type";

    pub const KEYWORD: &str = "http://fise.iks-project.eu/ontology/keyword";
    pub const COUNT: &str = "http://fise.iks-project.eu/ontology/count";
    pub const METRIC: &str = "http://fise.iks-project.eu/ontology/metric";

    pub const SENTIMENT: &str = "http://fise.iks-project.eu/ontology/sentiment";
}

/// Entityhub provenance vocabulary
pub mod entityhub {
    /// entityhub:site - the referenced site (dataset) an entity was found in
    pub const SITE: &str = "http://stanbol.apache.org/ontology/entityhub/entityhub#site";
}
