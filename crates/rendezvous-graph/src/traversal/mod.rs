//! Traversal engine: directional reachability and meeting points.

pub mod meeting;
pub mod reachable;

use std::collections::BTreeSet;

use rendezvous_core::errors::GraphResult;
pub use rendezvous_core::config::TraversalConfig;

use crate::graph::{Flow, LocationGraph};

pub use meeting::{meeting_points, MeetingReport};
pub use reachable::reachable_set;

/// The traversal engine wraps all traversal operations with a config.
#[derive(Debug, Clone, Default)]
pub struct TraversalEngine {
    pub config: TraversalConfig,
}

impl TraversalEngine {
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    /// Locations reachable from `starts` following `flow`.
    pub fn reachable_set<S: AsRef<str>>(
        &self,
        graph: &LocationGraph,
        starts: &[S],
        flow: Flow,
    ) -> GraphResult<BTreeSet<String>> {
        reachable::reachable_set(graph, starts, flow, self.config.effective_skip_forbidden())
    }

    /// Sorted meeting points for the two start lists.
    pub fn meeting_points<S: AsRef<str> + Sync>(
        &self,
        graph: &LocationGraph,
        first_starts: &[S],
        second_starts: &[S],
    ) -> GraphResult<Vec<String>> {
        meeting::compute_meeting_points(graph, first_starts, second_starts, &self.config)
    }

    /// Meeting points together with both reach sets.
    pub fn meeting_report<S: AsRef<str> + Sync>(
        &self,
        graph: &LocationGraph,
        first_starts: &[S],
        second_starts: &[S],
    ) -> GraphResult<MeetingReport> {
        meeting::compute_report(graph, first_starts, second_starts, &self.config)
    }
}
