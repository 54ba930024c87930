use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// How the engine resolves several records that share one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The first record in source order wins; later ones are ignored.
    #[default]
    First,
    /// All records for the period are added together.
    Sum,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub duplicate_policy: DuplicatePolicy,
}

impl QueryConfig {
    /// Parses a configuration document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}
