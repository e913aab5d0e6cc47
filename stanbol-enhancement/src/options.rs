//! Parse options
//!
//! Options can be built in code with the `with_*` methods or loaded from a
//! TOML document, for example the `[enhancement]` section of an application
//! config file:
//!
//! ```toml
//! dangling_relations = "fail"
//! dereference_entities = true
//! max_resolution_steps = 10000
//! ```

use crate::error::{EnhancementError, Result};
use serde::{Deserialize, Serialize};

/// What to do with a relation whose target never resolves to an enhancement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingRelationPolicy {
    /// Drop the edge and log a warning
    #[default]
    Drop,
    /// Fail the whole parse with `UnresolvedRelation`
    Fail,
}

/// Options controlling how an enhancement response is parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Policy for relation targets that never resolve
    pub dangling_relations: DanglingRelationPolicy,
    /// Fetch the statements of every referenced entity
    ///
    /// When false, entity annotations carry an entity holding only its URI.
    pub dereference_entities: bool,
    /// Upper bound on relation work-queue pops (unbounded when `None`)
    pub max_resolution_steps: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            dangling_relations: DanglingRelationPolicy::Drop,
            dereference_entities: true,
            max_resolution_steps: None,
        }
    }
}

impl ParseOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML document; absent keys keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| EnhancementError::Config(e.to_string()))
    }

    /// Set the dangling relation policy
    pub fn with_dangling_relations(mut self, policy: DanglingRelationPolicy) -> Self {
        self.dangling_relations = policy;
        self
    }

    /// Enable or disable entity dereferencing
    pub fn with_dereference_entities(mut self, enabled: bool) -> Self {
        self.dereference_entities = enabled;
        self
    }

    /// Bound the number of relation resolution steps
    pub fn with_max_resolution_steps(mut self, steps: usize) -> Self {
        self.max_resolution_steps = Some(steps);
        self
    }
}
