//! Dereferenced entities
//!
//! An [`Entity`] is the property bag of a linked entity URI: every statement
//! the response carries about it, grouped by property and language.

use stanbol_vocab::{rdf, rdfs};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Language key of an entity value
///
/// Values without a language tag live under [`LanguageKey::None`], which never
/// collides with a real tag. Tags are stored lowercased (tags are
/// case-insensitive).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageKey {
    /// No language tag (plain literal, IRI or blank node)
    None,
    /// A language tag, lowercased
    Tag(Arc<str>),
}

impl LanguageKey {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(t) => LanguageKey::Tag(Arc::from(t.to_ascii_lowercase())),
            None => LanguageKey::None,
        }
    }

    pub fn as_tag(&self) -> Option<&str> {
        match self {
            LanguageKey::Tag(t) => Some(t),
            LanguageKey::None => None,
        }
    }
}

type ValuesByLanguage = BTreeMap<LanguageKey, BTreeSet<Arc<str>>>;

/// A dereferenced entity: URI plus multi-valued, per-language properties
///
/// Values for one `(property, language)` key are a set ordered
/// lexicographically, so "first value" lookups are deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    uri: Arc<str>,
    properties: BTreeMap<Arc<str>, ValuesByLanguage>,
}

impl Entity {
    /// Create an entity with no properties
    pub fn new(uri: impl AsRef<str>) -> Self {
        Self {
            uri: Arc::from(uri.as_ref()),
            properties: BTreeMap::new(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub(crate) fn uri_arc(&self) -> &Arc<str> {
        &self.uri
    }

    /// Add one value. Returns false if it was already present.
    pub fn add_value(
        &mut self,
        property: impl AsRef<str>,
        language: Option<&str>,
        value: impl Into<Arc<str>>,
    ) -> bool {
        self.properties
            .entry(Arc::from(property.as_ref()))
            .or_default()
            .entry(LanguageKey::from_tag(language))
            .or_default()
            .insert(value.into())
    }

    /// True if no statements were folded into this entity
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Property IRIs that have at least one value
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|p| p.as_ref())
    }

    /// First value of `property` in `language` (`None` = untagged values only)
    pub fn value(&self, property: &str, language: Option<&str>) -> Option<&str> {
        self.values_in(property, language).next()
    }

    /// All values of `property` stored under `language` (`None` = untagged)
    pub fn values_in<'a>(
        &'a self,
        property: &str,
        language: Option<&str>,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.properties
            .get(property)
            .and_then(|by_lang| by_lang.get(&LanguageKey::from_tag(language)))
            .into_iter()
            .flatten()
            .map(|v| v.as_ref())
    }

    /// All values of `property` in every language, without duplicates
    pub fn values(&self, property: &str) -> BTreeSet<&str> {
        self.properties
            .get(property)
            .into_iter()
            .flat_map(|by_lang| by_lang.values())
            .flatten()
            .map(|v| v.as_ref())
            .collect()
    }

    /// Language keys under which `property` has values
    pub fn languages(&self, property: &str) -> Vec<&LanguageKey> {
        self.properties
            .get(property)
            .map(|by_lang| by_lang.keys().collect())
            .unwrap_or_default()
    }

    /// `rdfs:label` in `language`, falling back to the untagged label
    pub fn label(&self, language: &str) -> Option<&str> {
        self.value(rdfs::LABEL, Some(language))
            .or_else(|| self.value(rdfs::LABEL, None))
    }

    /// `rdf:type` values
    pub fn types(&self) -> BTreeSet<&str> {
        self.values(rdf::TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: &str = "http://dbpedia.org/resource/Paris";
    const PLACE: &str = "http://dbpedia.org/ontology/Place";

    fn paris() -> Entity {
        let mut e = Entity::new(PARIS);
        e.add_value(rdfs::LABEL, Some("en"), "Paris");
        e.add_value(rdfs::LABEL, Some("de"), "Paris");
        e.add_value(rdfs::LABEL, Some("ru"), "Париж");
        e.add_value(rdf::TYPE, None, PLACE);
        e
    }

    #[test]
    fn test_language_scoped_lookup() {
        let e = paris();
        assert_eq!(e.value(rdfs::LABEL, Some("en")), Some("Paris"));
        assert_eq!(e.value(rdfs::LABEL, Some("ru")), Some("Париж"));
        assert_eq!(e.value(rdfs::LABEL, Some("fr")), None);
        assert_eq!(e.value(rdfs::LABEL, None), None);
    }

    #[test]
    fn test_untagged_values_do_not_collide_with_tags() {
        let mut e = Entity::new(PARIS);
        e.add_value(rdfs::COMMENT, None, "plain");
        e.add_value(rdfs::COMMENT, Some("en"), "tagged");
        assert_eq!(e.value(rdfs::COMMENT, None), Some("plain"));
        assert_eq!(e.value(rdfs::COMMENT, Some("en")), Some("tagged"));
        assert_eq!(
            e.languages(rdfs::COMMENT),
            vec![&LanguageKey::None, &LanguageKey::Tag(Arc::from("en"))]
        );
    }

    #[test]
    fn test_language_tags_are_case_insensitive() {
        let mut e = Entity::new(PARIS);
        e.add_value(rdfs::LABEL, Some("en-GB"), "Paris");
        assert_eq!(e.value(rdfs::LABEL, Some("en-gb")), Some("Paris"));
        assert_eq!(e.value(rdfs::LABEL, Some("EN-GB")), Some("Paris"));
    }

    #[test]
    fn test_values_accumulate_and_dedupe() {
        let mut e = paris();
        assert!(e.add_value(rdf::TYPE, None, "http://dbpedia.org/ontology/City"));
        assert!(!e.add_value(rdf::TYPE, None, PLACE));
        assert_eq!(e.types().len(), 2);
        assert!(e.types().contains(PLACE));

        // "Paris" appears under two languages but once in the union
        assert_eq!(e.values(rdfs::LABEL).len(), 2);
    }

    #[test]
    fn test_label_fallback() {
        let mut e = Entity::new(PARIS);
        e.add_value(rdfs::LABEL, None, "Paris (untagged)");
        assert_eq!(e.label("it"), Some("Paris (untagged)"));
        e.add_value(rdfs::LABEL, Some("it"), "Parigi");
        assert_eq!(e.label("it"), Some("Parigi"));
    }

    #[test]
    fn test_missing_property() {
        let e = Entity::new(PARIS);
        assert!(e.is_empty());
        assert!(e.values("http://example.org/none").is_empty());
        assert!(e.languages("http://example.org/none").is_empty());
        assert_eq!(e.properties().count(), 0);
    }
}
