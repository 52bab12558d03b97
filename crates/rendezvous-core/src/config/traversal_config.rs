//! Reachability traversal configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the reachability engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TraversalConfig {
    /// Treat forbidden locations as walls. Default: true.
    pub skip_forbidden: Option<bool>,
    /// Run the downstream and upstream traversals concurrently. Default: false.
    pub parallel: Option<bool>,
}

impl TraversalConfig {
    pub fn effective_skip_forbidden(&self) -> bool {
        self.skip_forbidden.unwrap_or(defaults::DEFAULT_SKIP_FORBIDDEN)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(defaults::DEFAULT_PARALLEL)
    }
}
