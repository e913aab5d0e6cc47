//! Annotation model

mod enhancement;
mod entity;

pub use enhancement::{
    Enhancement, EnhancementId, EnhancementKind, EnhancementType, EntityAnnotation,
    KeywordAnnotation, SentimentAnnotation, TextAnnotation, TopicAnnotation,
};
pub use entity::{Entity, LanguageKey};
