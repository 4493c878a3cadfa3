//! First-aid catalog entries.

use serde::{Deserialize, Serialize};

/// A named emergency with its free-text response steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyEntry {
    pub name: String,
    pub steps: String,
}

impl EmergencyEntry {
    pub fn new(name: impl Into<String>, steps: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: steps.into(),
        }
    }

    /// Whether `query` appears verbatim (case-sensitive) in the name or the steps.
    pub fn mentions(&self, query: &str) -> bool {
        self.name.contains(query) || self.steps.contains(query)
    }
}
