//! Query shapes understood by a [`StoreReader`](crate::StoreReader)
//!
//! A [`SelectQuery`] is a basic graph pattern (all required patterns must
//! match) followed by any number of `OPTIONAL` groups. Each group is
//! left-joined on its own, in declaration order, so a subject with two values
//! for one optional group and two for another produces four rows.

use crate::error::{Result, StoreError};
use crate::pattern::TriplePattern;

/// `SELECT *` over a basic graph pattern with `OPTIONAL` groups
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectQuery {
    /// Required patterns (joined)
    pub patterns: Vec<TriplePattern>,
    /// Optional groups (each left-joined independently)
    pub optionals: Vec<Vec<TriplePattern>>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required pattern
    pub fn pattern(mut self, pattern: TriplePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Add a single-pattern `OPTIONAL { ... }` group
    pub fn optional(mut self, pattern: TriplePattern) -> Self {
        self.optionals.push(vec![pattern]);
        self
    }

    /// Add a multi-pattern `OPTIONAL { ... }` group
    pub fn optional_group(mut self, group: Vec<TriplePattern>) -> Self {
        self.optionals.push(group);
        self
    }

    /// Reject queries that can never be evaluated
    pub fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(StoreError::invalid_query(
                "SELECT requires at least one required pattern",
            ));
        }
        if self.optionals.iter().any(Vec::is_empty) {
            return Err(StoreError::invalid_query("empty OPTIONAL group"));
        }
        validate_patterns(self.patterns.iter().chain(self.optionals.iter().flatten()))
    }
}

/// `ASK { ... }` over a basic graph pattern
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AskQuery {
    pub patterns: Vec<TriplePattern>,
}

impl AskQuery {
    pub fn new(pattern: TriplePattern) -> Self {
        Self {
            patterns: vec![pattern],
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(StoreError::invalid_query("ASK requires at least one pattern"));
        }
        validate_patterns(self.patterns.iter())
    }
}

fn validate_patterns<'a>(patterns: impl Iterator<Item = &'a TriplePattern>) -> Result<()> {
    for pattern in patterns {
        pattern.validate().map_err(StoreError::InvalidQuery)?;
    }
    Ok(())
}
