//! Annotation factory
//!
//! Builds enhancement nodes from discovery-query rows. A node appears once per
//! combination of its optional bindings, so the factory is idempotent per
//! subject: the first row creates the node, later rows only add to its
//! multi-valued fields (relations, entity types) and fill scalar fields that
//! were still unset.

use chrono::{DateTime, Utc};
use rustc_hash::{FxHashMap, FxHashSet};
use stanbol_graph_ir::{Literal, Term};
use stanbol_store::Solution;
use stanbol_vocab::dcterms;
use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use crate::error::{EnhancementError, Result};
use crate::model::{Enhancement, EnhancementId, EnhancementKind, EnhancementType};
use crate::queries::{vars, Subject};

/// An enhancement under construction, with its relations still as keys
#[derive(Debug)]
pub(crate) struct StagedEnhancement {
    /// Resource key of the node (IRI or `_:label`)
    pub(crate) key: Arc<str>,
    pub(crate) enhancement: Enhancement,
    /// Resource keys of relation targets (IRI or `_:label`)
    pub(crate) relation_keys: BTreeSet<Arc<str>>,
}

/// Nodes created so far, keyed by resource key
#[derive(Debug, Default)]
pub(crate) struct Registry {
    pub(crate) nodes: Vec<StagedEnhancement>,
    pub(crate) by_key: FxHashMap<Arc<str>, EnhancementId>,
    /// Keys of language annotations (parsed, but not enhancement nodes)
    pub(crate) language_nodes: FxHashSet<Arc<str>>,
    pub(crate) languages: BTreeSet<Arc<str>>,
    /// Relation keys seen since the last drain, in discovery order
    pub(crate) discovered: VecDeque<Arc<str>>,
}

impl Registry {
    /// True if `key` already resolved to a node or a language annotation
    pub(crate) fn is_resolved(&self, key: &str) -> bool {
        self.by_key.contains_key(key) || self.language_nodes.contains(key)
    }

    /// Take the relation keys discovered since the last call
    pub(crate) fn drain_discovered(&mut self) -> impl Iterator<Item = Arc<str>> + '_ {
        self.discovered.drain(..)
    }

    pub(crate) fn get(&self, id: EnhancementId) -> &StagedEnhancement {
        &self.nodes[id.index()]
    }

    pub(crate) fn add_language(&mut self, tag: &str) {
        if !tag.is_empty() && !self.languages.contains(tag) {
            self.languages.insert(Arc::from(tag));
        }
    }
}

/// Creates or extends nodes in a [`Registry`] from query rows
pub(crate) struct AnnotationFactory<'r> {
    registry: &'r mut Registry,
}

impl<'r> AnnotationFactory<'r> {
    pub(crate) fn new(registry: &'r mut Registry) -> Self {
        Self { registry }
    }

    /// Record the language of a language-annotation row
    pub(crate) fn language_row(&mut self, row: &Solution) -> Result<()> {
        let key = subject_key(Subject::Any, row)?;
        if let Some(tag) = row.literal(vars::LANGUAGE) {
            self.registry.add_language(tag.lexical());
        }
        self.registry.language_nodes.insert(key);
        Ok(())
    }

    /// Build or extend the node described by one discovery row.
    ///
    /// Returns `None` for rows that describe a language annotation.
    pub(crate) fn enhancement_row(
        &mut self,
        ty: EnhancementType,
        subject: Subject<'_>,
        row: &Solution,
    ) -> Result<Option<EnhancementId>> {
        let key = subject_key(subject, row)?;

        if ty == EnhancementType::Text
            && (self.registry.language_nodes.contains(&key) || is_language_annotation(row))
        {
            if let Some(tag) = row.literal(vars::LANGUAGE) {
                self.registry.add_language(tag.lexical());
            }
            self.registry.language_nodes.insert(key);
            return Ok(None);
        }

        let id = match self.registry.by_key.get(&key) {
            Some(&id) => {
                let existing = self.registry.get(id).enhancement.enhancement_type();
                if existing != ty {
                    // A node typed with two annotation classes keeps its first reading
                    tracing::debug!(
                        key = %key,
                        first = %existing,
                        ignored = %ty,
                        "node has several annotation types"
                    );
                    return Ok(Some(id));
                }
                id
            }
            None => self.create(ty, &key, row)?,
        };

        self.extend(id, &key, row)?;
        Ok(Some(id))
    }

    /// Create and register a node from its first row
    fn create(
        &mut self,
        ty: EnhancementType,
        key: &Arc<str>,
        row: &Solution,
    ) -> Result<EnhancementId> {
        let id = EnhancementId(self.registry.nodes.len() as u32);
        let uri = (!key.starts_with("_:")).then(|| key.clone());
        let mut enhancement = Enhancement::new(id, uri, ty);

        enhancement.confidence = match row.get(vars::CONFIDENCE) {
            Some(term) => Some(parse_confidence(key, term)?),
            None if ty.requires_confidence() => {
                return Err(EnhancementError::malformed(key, "missing fise:confidence"));
            }
            None => None,
        };
        enhancement.language = lexical(row, vars::LANGUAGE);

        if let EnhancementKind::Sentiment(s) = &mut enhancement.kind {
            let term = row
                .get(vars::SENTIMENT)
                .ok_or_else(|| EnhancementError::malformed(key, "missing fise:sentiment"))?;
            s.sentiment = parse_in_range(key, term, "fise:sentiment", -1.0, 1.0)?;
        }

        tracing::trace!(key = %key, ty = %ty, "created enhancement");
        self.registry.nodes.push(StagedEnhancement {
            key: key.clone(),
            enhancement,
            relation_keys: BTreeSet::new(),
        });
        self.registry.by_key.insert(key.clone(), id);
        Ok(id)
    }

    /// Apply one row's bindings to an existing node
    fn extend(&mut self, id: EnhancementId, key: &Arc<str>, row: &Solution) -> Result<()> {
        let staged = &mut self.registry.nodes[id.index()];
        let e = &mut staged.enhancement;

        if e.created.is_none() {
            if let Some(term) = row.get(vars::CREATED) {
                e.created = Some(parse_date_time(key, term)?);
            }
        }
        set_once(&mut e.creator, row.get(vars::CREATOR).map(Term::value));
        set_once(
            &mut e.extracted_from,
            row.get(vars::EXTRACTED_FROM).map(Term::value),
        );

        if let Some(target) = row.get(vars::RELATION) {
            let target = target.resource_key().ok_or_else(|| {
                EnhancementError::malformed(key, "dcterms:relation to a literal")
            })?;
            if staged.relation_keys.insert(target.clone()) {
                self.registry.discovered.push_back(target);
            }
        }

        let e = &mut self.registry.nodes[id.index()].enhancement;
        match &mut e.kind {
            EnhancementKind::Text(t) => {
                set_once(&mut t.text_type, row.get(vars::TYPE).map(Term::value));
                set_once(&mut t.selected_text, lexical(row, vars::SELECTED_TEXT));
                set_once(&mut t.selection_context, lexical(row, vars::SELECTION_CONTEXT));
                if t.start.is_none() {
                    t.start = parse_offset(key, row, vars::START)?;
                }
                if t.end.is_none() {
                    t.end = parse_offset(key, row, vars::END)?;
                }
                check_span(key, t.start, t.end)?;
            }
            EnhancementKind::Entity(ea) => {
                set_once(&mut ea.entity_label, lexical(row, vars::LABEL));
                if ea.entity_reference.is_none() {
                    ea.entity_reference = match row.get(vars::REFERENCE) {
                        Some(term) => Some(term.resource_key().ok_or_else(|| {
                            EnhancementError::malformed(key, "fise:entity-reference is a literal")
                        })?),
                        None => None,
                    };
                }
                if let Some(ty) = row.get(vars::ENTITY_TYPE) {
                    ea.entity_types.insert(ty.value());
                }
                set_once(&mut ea.site, row.get(vars::SITE).map(Term::value));
            }
            EnhancementKind::Topic(ta) => {
                set_once(&mut ta.topic_label, lexical(row, vars::LABEL));
                set_once(&mut ta.topic_reference, row.get(vars::REFERENCE).map(Term::value));
                if let Some(ty) = row.get(vars::ENTITY_TYPE) {
                    ta.types.insert(ty.value());
                }
                set_once(&mut ta.site, row.get(vars::SITE).map(Term::value));
            }
            EnhancementKind::Keyword(k) => {
                set_once(&mut k.keyword, lexical(row, vars::KEYWORD));
                if k.count.is_none() {
                    if let Some(term) = row.get(vars::COUNT) {
                        k.count = Some(parse_count(key, term, "fise:count")?);
                    }
                }
                if k.metric.is_none() {
                    if let Some(term) = row.get(vars::METRIC) {
                        k.metric = Some(parse_f64(key, term, "fise:metric")?);
                    }
                }
            }
            EnhancementKind::Sentiment(s) => {
                if s.start.is_none() {
                    s.start = parse_offset(key, row, vars::START)?;
                }
                if s.end.is_none() {
                    s.end = parse_offset(key, row, vars::END)?;
                }
                check_span(key, s.start, s.end)?;
            }
        }
        Ok(())
    }
}

/// Resource key of the row's subject
fn subject_key(subject: Subject<'_>, row: &Solution) -> Result<Arc<str>> {
    match subject {
        Subject::Bound(key) => Ok(Arc::from(key)),
        Subject::Any => match row.get(vars::NODE) {
            Some(term) => term.resource_key().ok_or_else(|| {
                EnhancementError::malformed(&term.value(), "enhancement subject is a literal")
            }),
            None => Err(EnhancementError::malformed(
                &Arc::from("?e"),
                "row does not bind the enhancement node",
            )),
        },
    }
}

fn is_language_annotation(row: &Solution) -> bool {
    row.iri(vars::TYPE) == Some(dcterms::LINGUISTIC_SYSTEM)
}

fn set_once(slot: &mut Option<Arc<str>>, value: Option<Arc<str>>) {
    if slot.is_none() {
        *slot = value;
    }
}

fn lexical(row: &Solution, var: &str) -> Option<Arc<str>> {
    row.literal(var).map(|l| l.lexical_arc().clone())
}

fn literal<'a>(key: &Arc<str>, term: &'a Term, field: &str) -> Result<&'a Literal> {
    term.as_literal().ok_or_else(|| {
        EnhancementError::malformed(key, format!("{field} is not a literal: {term}"))
    })
}

fn parse_f64(key: &Arc<str>, term: &Term, field: &str) -> Result<f64> {
    literal(key, term, field)?
        .as_f64()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| EnhancementError::malformed(key, format!("{field} is not numeric: {term}")))
}

fn parse_in_range(key: &Arc<str>, term: &Term, field: &str, min: f64, max: f64) -> Result<f64> {
    let value = parse_f64(key, term, field)?;
    if !(min..=max).contains(&value) {
        return Err(EnhancementError::malformed(
            key,
            format!("{field} {value} outside [{min}, {max}]"),
        ));
    }
    Ok(value)
}

pub(crate) fn parse_confidence(key: &Arc<str>, term: &Term) -> Result<f64> {
    parse_in_range(key, term, "fise:confidence", 0.0, 1.0)
}

fn parse_count(key: &Arc<str>, term: &Term, field: &str) -> Result<u64> {
    let value = literal(key, term, field)?
        .as_i64()
        .ok_or_else(|| {
            EnhancementError::malformed(key, format!("{field} is not an integer: {term}"))
        })?;
    u64::try_from(value)
        .map_err(|_| EnhancementError::malformed(key, format!("{field} is negative: {value}")))
}

fn parse_offset(key: &Arc<str>, row: &Solution, var: &str) -> Result<Option<usize>> {
    let Some(term) = row.get(var) else {
        return Ok(None);
    };
    let field = format!("fise:{var}");
    let value = parse_count(key, term, &field)?;
    usize::try_from(value)
        .map(Some)
        .map_err(|_| EnhancementError::malformed(key, format!("{field} out of range: {value}")))
}

fn check_span(key: &Arc<str>, start: Option<usize>, end: Option<usize>) -> Result<()> {
    match (start, end) {
        (Some(s), Some(e)) if e <= s => Err(EnhancementError::malformed(
            key,
            format!("fise:end {e} is not after fise:start {s}"),
        )),
        _ => Ok(()),
    }
}

fn parse_date_time(key: &Arc<str>, term: &Term) -> Result<DateTime<Utc>> {
    let lexical = literal(key, term, "dcterms:created")?.lexical();
    DateTime::parse_from_rfc3339(lexical.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            EnhancementError::malformed(key, format!("dcterms:created {lexical:?}: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stanbol_graph_ir::Datatype;
    use stanbol_store::Var;

    fn row(bindings: &[(&str, Term)]) -> Solution {
        bindings
            .iter()
            .map(|(name, term)| (Var::new(name), term.clone()))
            .collect()
    }

    fn ea_row(extra: &[(&str, Term)]) -> Solution {
        let mut bindings = vec![
            (vars::NODE, Term::iri("urn:ea1")),
            (vars::CONFIDENCE, Term::double(0.9)),
        ];
        bindings.extend(extra.iter().cloned());
        row(&bindings)
    }

    #[test]
    fn test_entity_types_accumulate_across_rows() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        let place = "http://dbpedia.org/ontology/Place";
        let capital = "http://dbpedia.org/ontology/Capital";

        let a = factory
            .enhancement_row(
                EnhancementType::Entity,
                Subject::Any,
                &ea_row(&[(vars::ENTITY_TYPE, Term::iri(place))]),
            )
            .unwrap();
        let b = factory
            .enhancement_row(
                EnhancementType::Entity,
                Subject::Any,
                &ea_row(&[(vars::ENTITY_TYPE, Term::iri(capital))]),
            )
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(registry.nodes.len(), 1);

        let types: Vec<_> = registry.nodes[0]
            .enhancement
            .as_entity()
            .unwrap()
            .entity_types
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(types, vec![capital.to_string(), place.to_string()]);
    }

    #[test]
    fn test_relations_accumulate_and_are_discovered_once() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        for target in ["urn:ta1", "urn:ta2", "urn:ta1"] {
            factory
                .enhancement_row(
                    EnhancementType::Entity,
                    Subject::Any,
                    &ea_row(&[(vars::RELATION, Term::iri(target))]),
                )
                .unwrap();
        }
        assert_eq!(registry.nodes[0].relation_keys.len(), 2);
        let discovered: Vec<_> = registry.drain_discovered().collect();
        assert_eq!(discovered.len(), 2);
        assert_eq!(registry.drain_discovered().count(), 0);
    }

    #[test]
    fn test_scalar_fields_set_from_first_row() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        factory
            .enhancement_row(
                EnhancementType::Entity,
                Subject::Any,
                &ea_row(&[(vars::LABEL, Term::lang_string("Paris", "en"))]),
            )
            .unwrap();
        factory
            .enhancement_row(
                EnhancementType::Entity,
                Subject::Any,
                &ea_row(&[(vars::LABEL, Term::lang_string("Parigi", "it"))]),
            )
            .unwrap();
        let ea = registry.nodes[0].enhancement.as_entity().unwrap();
        assert_eq!(ea.entity_label.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_missing_confidence_is_malformed() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        let err = factory
            .enhancement_row(
                EnhancementType::Text,
                Subject::Any,
                &row(&[(vars::NODE, Term::iri("urn:ta1"))]),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            EnhancementError::MalformedEnhancement { ref uri, .. } if &**uri == "urn:ta1"
        ));
        assert!(registry.nodes.is_empty());
    }

    #[test]
    fn test_keyword_confidence_is_optional() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        let id = factory
            .enhancement_row(
                EnhancementType::Keyword,
                Subject::Any,
                &row(&[
                    (vars::NODE, Term::iri("urn:kw1")),
                    (vars::KEYWORD, Term::string("harbour")),
                    (vars::COUNT, Term::int(3)),
                    (vars::METRIC, Term::double(0.42)),
                ]),
            )
            .unwrap()
            .unwrap();
        let e = &registry.get(id).enhancement;
        assert_eq!(e.confidence(), None);
        let kw = e.as_keyword().unwrap();
        assert_eq!(kw.keyword.as_deref(), Some("harbour"));
        assert_eq!(kw.count, Some(3));
        assert_eq!(kw.metric, Some(0.42));
    }

    #[test]
    fn test_non_numeric_confidence_is_malformed() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        let bad = row(&[
            (vars::NODE, Term::iri("urn:ea1")),
            (vars::CONFIDENCE, Term::string("very")),
        ]);
        assert!(factory
            .enhancement_row(EnhancementType::Entity, Subject::Any, &bad)
            .unwrap_err()
            .is_malformed());

        let out_of_range = row(&[
            (vars::NODE, Term::iri("urn:ea2")),
            (vars::CONFIDENCE, Term::double(1.5)),
        ]);
        assert!(factory
            .enhancement_row(EnhancementType::Entity, Subject::Any, &out_of_range)
            .is_err());
    }

    #[test]
    fn test_text_span_and_validation() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        let ok = row(&[
            (vars::NODE, Term::iri("urn:ta1")),
            (vars::CONFIDENCE, Term::double(1.0)),
            (vars::START, Term::int(0)),
            (vars::END, Term::int(5)),
            (vars::SELECTED_TEXT, Term::lang_string("Paris", "en")),
        ]);
        let id = factory
            .enhancement_row(EnhancementType::Text, Subject::Any, &ok)
            .unwrap()
            .unwrap();
        let ta = registry.get(id).enhancement.as_text().unwrap().clone();
        assert_eq!((ta.start, ta.end), (Some(0), Some(5)));
        assert_eq!(ta.selected_text.as_deref(), Some("Paris"));

        let mut factory = AnnotationFactory::new(&mut registry);
        let inverted = row(&[
            (vars::NODE, Term::iri("urn:ta2")),
            (vars::CONFIDENCE, Term::double(1.0)),
            (vars::START, Term::int(9)),
            (vars::END, Term::int(4)),
        ]);
        assert!(factory
            .enhancement_row(EnhancementType::Text, Subject::Any, &inverted)
            .is_err());
    }

    #[test]
    fn test_language_annotation_is_not_a_node() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        let lang = row(&[
            (vars::NODE, Term::iri("urn:lang")),
            (vars::CONFIDENCE, Term::double(1.0)),
            (vars::TYPE, Term::iri(dcterms::LINGUISTIC_SYSTEM)),
            (vars::LANGUAGE, Term::string("en")),
        ]);
        let id = factory
            .enhancement_row(EnhancementType::Text, Subject::Any, &lang)
            .unwrap();
        assert_eq!(id, None);
        assert!(registry.nodes.is_empty());
        assert!(registry.is_resolved("urn:lang"));
        assert!(registry.languages.contains("en"));
    }

    #[test]
    fn test_created_timestamp() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        let created = Term::typed("2013-05-17T09:21:54.520Z", Datatype::xsd_date_time());
        let id = factory
            .enhancement_row(
                EnhancementType::Entity,
                Subject::Any,
                &ea_row(&[(vars::CREATED, created)]),
            )
            .unwrap()
            .unwrap();
        let ts = registry.get(id).enhancement.created().unwrap();
        assert_eq!(ts.to_rfc3339(), "2013-05-17T09:21:54.520+00:00");

        let mut factory = AnnotationFactory::new(&mut registry);
        let bad = row(&[
            (vars::NODE, Term::iri("urn:ea9")),
            (vars::CONFIDENCE, Term::double(0.5)),
            (vars::CREATED, Term::string("yesterday")),
        ]);
        assert!(factory
            .enhancement_row(EnhancementType::Entity, Subject::Any, &bad)
            .unwrap_err()
            .is_malformed());
    }

    #[test]
    fn test_blank_node_enhancement_has_no_uri() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        let r = row(&[
            (vars::NODE, Term::blank("b1")),
            (vars::CONFIDENCE, Term::double(0.3)),
        ]);
        let id = factory
            .enhancement_row(EnhancementType::Topic, Subject::Any, &r)
            .unwrap()
            .unwrap();
        assert_eq!(registry.get(id).enhancement.uri(), None);
        assert!(registry.is_resolved("_:b1"));
    }

    #[test]
    fn test_sentiment_requires_value_in_range() {
        let mut registry = Registry::default();
        let mut factory = AnnotationFactory::new(&mut registry);
        let r = row(&[
            (vars::NODE, Term::iri("urn:s1")),
            (vars::SENTIMENT, Term::double(-0.4)),
        ]);
        let id = factory
            .enhancement_row(EnhancementType::Sentiment, Subject::Any, &r)
            .unwrap()
            .unwrap();
        let s = registry.get(id).enhancement.as_sentiment().unwrap();
        assert_eq!(s.sentiment, -0.4);
        assert!(s.is_document_level());

        let mut factory = AnnotationFactory::new(&mut registry);
        let r = row(&[
            (vars::NODE, Term::iri("urn:s2")),
            (vars::SENTIMENT, Term::double(3.0)),
        ]);
        assert!(factory
            .enhancement_row(EnhancementType::Sentiment, Subject::Any, &r)
            .is_err());
    }
}
