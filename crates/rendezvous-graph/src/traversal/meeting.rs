//! Meeting points: downstream reach of the first agent intersected with the
//! upstream reach of the second.

use std::collections::BTreeSet;

use petgraph::stable_graph::NodeIndex;
use rustc_hash::FxHashSet;
use tracing::info;

use rendezvous_core::config::TraversalConfig;
use rendezvous_core::errors::GraphResult;

use super::reachable::{names_of, reach_indices};
use crate::graph::{Flow, LocationGraph};

/// Both reach sets plus their intersection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingReport {
    /// Reachable downstream from the first agent's starts.
    pub downstream: BTreeSet<String>,
    /// Reachable upstream from the second agent's starts.
    pub upstream: BTreeSet<String>,
    /// Sorted, duplicate-free intersection of the two.
    pub meeting_points: Vec<String>,
}

/// Locations the two agents can both reach, sorted ascending by ordinal
/// string comparison. Uses the default traversal config.
pub fn meeting_points<S: AsRef<str> + Sync>(
    graph: &LocationGraph,
    first_starts: &[S],
    second_starts: &[S],
) -> GraphResult<Vec<String>> {
    compute_meeting_points(graph, first_starts, second_starts, &TraversalConfig::default())
}

pub(crate) fn compute_meeting_points<S: AsRef<str> + Sync>(
    graph: &LocationGraph,
    first_starts: &[S],
    second_starts: &[S],
    config: &TraversalConfig,
) -> GraphResult<Vec<String>> {
    let (down, up) = reach_both(graph, first_starts, second_starts, config)?;
    Ok(intersect_sorted(graph, &down, &up))
}

pub(crate) fn compute_report<S: AsRef<str> + Sync>(
    graph: &LocationGraph,
    first_starts: &[S],
    second_starts: &[S],
    config: &TraversalConfig,
) -> GraphResult<MeetingReport> {
    let (down, up) = reach_both(graph, first_starts, second_starts, config)?;
    Ok(MeetingReport {
        meeting_points: intersect_sorted(graph, &down, &up),
        downstream: names_of(graph, down.into_iter()),
        upstream: names_of(graph, up.into_iter()),
    })
}

/// Run both directional traversals. The first agent's error wins when both
/// fail, in sequential and parallel mode alike.
fn reach_both<S: AsRef<str> + Sync>(
    graph: &LocationGraph,
    first_starts: &[S],
    second_starts: &[S],
    config: &TraversalConfig,
) -> GraphResult<(FxHashSet<NodeIndex>, FxHashSet<NodeIndex>)> {
    let _span = rendezvous_core::meeting_span!(first_starts.len(), second_starts.len()).entered();
    let skip_forbidden = config.effective_skip_forbidden();

    let down_reach = || reach_indices(graph, first_starts, Flow::Downstream, skip_forbidden);
    let up_reach = || reach_indices(graph, second_starts, Flow::Upstream, skip_forbidden);

    let (down, up) = if config.effective_parallel() {
        let (down, up) = rayon::join(down_reach, up_reach);
        (down?, up?)
    } else {
        let down = down_reach()?;
        (down, up_reach()?)
    };

    info!(
        downstream = down.len(),
        upstream = up.len(),
        parallel = config.effective_parallel(),
        "meeting reach sets computed"
    );
    Ok((down, up))
}

fn intersect_sorted(
    graph: &LocationGraph,
    down: &FxHashSet<NodeIndex>,
    up: &FxHashSet<NodeIndex>,
) -> Vec<String> {
    let mut points: Vec<String> = up
        .iter()
        .filter(|idx| down.contains(idx))
        .map(|&idx| graph.location(idx).name().to_string())
        .collect();
    points.sort_unstable();
    points
}
