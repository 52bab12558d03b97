//! Scenario input configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the scenario text reader.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Line that terminates the edge list. Default: "Avoid:".
    pub avoid_marker: Option<String>,
}

impl InputConfig {
    /// Returns the effective avoid marker, defaulting to "Avoid:".
    /// Surrounding whitespace is stripped, since marker lines are matched
    /// after trimming.
    pub fn effective_avoid_marker(&self) -> &str {
        self.avoid_marker
            .as_deref()
            .unwrap_or(defaults::DEFAULT_AVOID_MARKER)
            .trim()
    }
}
