//! Shared fixtures for stanbol-enhancement integration tests.

// Not every test crate uses every helper.
#![allow(dead_code)]

pub mod trace_capture;

use stanbol_graph_ir::{Datatype, Term, Triple};
use stanbol_store::MemoryStore;
use stanbol_vocab::{dcterms, entityhub, fise, rdf, rdfs};

pub const DBPEDIA: &str = "http://dbpedia.org/resource/";
pub const DBO: &str = "http://dbpedia.org/ontology/";
pub const ENHANCEMENT: &str = "urn:enhancement:";

/// `urn:enhancement:<local>`
pub fn enh(local: &str) -> String {
    format!("{ENHANCEMENT}{local}")
}

pub fn dbpedia(local: &str) -> String {
    format!("{DBPEDIA}{local}")
}

pub fn dbo(local: &str) -> String {
    format!("{DBO}{local}")
}

/// Builder for enhancement structures.
///
/// Subjects given as `local` names are expanded with [`enh`]; a name starting
/// with `_:` is used as a blank node.
#[derive(Debug, Default)]
pub struct Fixture {
    triples: Vec<Triple>,
}

fn subject(local: &str) -> Term {
    match local.strip_prefix("_:") {
        Some(label) => Term::blank(label),
        None => Term::iri(enh(local)),
    }
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triple(mut self, s: Term, p: &str, o: Term) -> Self {
        self.triples.push(Triple::new(s, Term::iri(p), o));
        self
    }

    fn on(self, local: &str, p: &str, o: Term) -> Self {
        self.triple(subject(local), p, o)
    }

    pub fn typed(self, local: &str, class: &str) -> Self {
        self.on(local, rdf::TYPE, Term::iri(class))
    }

    pub fn confidence(self, local: &str, confidence: f64) -> Self {
        self.on(local, fise::CONFIDENCE, Term::double(confidence))
    }

    pub fn text_annotation(self, local: &str, confidence: f64) -> Self {
        self.typed(local, fise::ENHANCEMENT)
            .typed(local, fise::TEXT_ANNOTATION)
            .confidence(local, confidence)
    }

    pub fn entity_annotation(self, local: &str, confidence: f64) -> Self {
        self.typed(local, fise::ENHANCEMENT)
            .typed(local, fise::ENTITY_ANNOTATION)
            .confidence(local, confidence)
    }

    pub fn topic_annotation(self, local: &str, confidence: f64) -> Self {
        self.typed(local, fise::ENHANCEMENT)
            .typed(local, fise::TOPIC_ANNOTATION)
            .confidence(local, confidence)
    }

    /// Language annotation: a text annotation typed `dcterms:LinguisticSystem`
    pub fn language_annotation(self, local: &str, language: &str) -> Self {
        self.text_annotation(local, 1.0)
            .on(local, dcterms::TYPE, Term::iri(dcterms::LINGUISTIC_SYSTEM))
            .on(local, dcterms::LANGUAGE, Term::string(language))
    }

    pub fn span(self, local: &str, start: i64, end: i64) -> Self {
        self.on(local, fise::START, Term::int(start))
            .on(local, fise::END, Term::int(end))
    }

    pub fn selected_text(self, local: &str, text: &str) -> Self {
        self.on(local, fise::SELECTED_TEXT, Term::string(text))
    }

    pub fn relation(self, from: &str, to: &str) -> Self {
        self.on(from, dcterms::RELATION, subject(to))
    }

    pub fn entity_reference(self, local: &str, entity: &str) -> Self {
        self.on(local, fise::ENTITY_REFERENCE, Term::iri(entity))
    }

    pub fn entity_label(self, local: &str, label: &str, lang: &str) -> Self {
        self.on(local, fise::ENTITY_LABEL, Term::lang_string(label, lang))
    }

    pub fn entity_type(self, local: &str, ty: &str) -> Self {
        self.on(local, fise::ENTITY_TYPE, Term::iri(ty))
    }

    pub fn site(self, local: &str, site: &str) -> Self {
        self.on(local, entityhub::SITE, Term::string(site))
    }

    pub fn created(self, local: &str, timestamp: &str) -> Self {
        self.on(
            local,
            dcterms::CREATED,
            Term::typed(timestamp, Datatype::xsd_date_time()),
        )
    }

    pub fn creator(self, local: &str, engine: &str) -> Self {
        self.on(local, dcterms::CREATOR, Term::string(engine))
    }

    /// Statements about an entity, as a dereferencing engine would add them
    pub fn entity_label_statement(self, entity: &str, label: &str, lang: &str) -> Self {
        self.triple(Term::iri(entity), rdfs::LABEL, Term::lang_string(label, lang))
    }

    pub fn entity_type_statement(self, entity: &str, ty: &str) -> Self {
        self.triple(Term::iri(entity), rdf::TYPE, Term::iri(ty))
    }

    pub fn store(self) -> MemoryStore {
        self.triples.into_iter().collect()
    }
}

/// ea1 (0.9) suggests Paris for ta1 (1.0, "Paris" at 0..5)
pub fn paris_fixture() -> Fixture {
    let paris = dbpedia("Paris");
    Fixture::new()
        .text_annotation("ta1", 1.0)
        .span("ta1", 0, 5)
        .selected_text("ta1", "Paris")
        .entity_annotation("ea1", 0.9)
        .relation("ea1", "ta1")
        .entity_reference("ea1", &paris)
        .entity_label("ea1", "Paris", "en")
        .entity_type("ea1", &dbo("Place"))
        .entity_label_statement(&paris, "Paris", "en")
        .entity_label_statement(&paris, "Parigi", "it")
        .entity_type_statement(&paris, &dbo("Place"))
}
