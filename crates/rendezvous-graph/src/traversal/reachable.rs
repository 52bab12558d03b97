//! Multi-source BFS that treats forbidden locations as walls.

use std::collections::{BTreeSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use rustc_hash::FxHashSet;
use tracing::debug;

use rendezvous_core::errors::{GraphError, GraphResult};

use crate::graph::{Flow, LocationGraph};

/// Every location reachable from `starts` by following `flow`, start
/// locations included.
///
/// With `skip_forbidden`, forbidden locations are never part of the result
/// and no path passes through them; a forbidden start contributes nothing.
///
/// Fails with `InvalidArgument` for an empty start list and `NotFound` for
/// an unknown start name, before any traversal work.
pub fn reachable_set<S: AsRef<str>>(
    graph: &LocationGraph,
    starts: &[S],
    flow: Flow,
    skip_forbidden: bool,
) -> GraphResult<BTreeSet<String>> {
    let reached = reach_indices(graph, starts, flow, skip_forbidden)?;
    Ok(names_of(graph, reached.iter().copied()))
}

pub(crate) fn reach_indices<S: AsRef<str>>(
    graph: &LocationGraph,
    starts: &[S],
    flow: Flow,
    skip_forbidden: bool,
) -> GraphResult<FxHashSet<NodeIndex>> {
    let start_indices = resolve_starts(graph, starts)?;
    let _span = rendezvous_core::reach_span!(flow, start_indices.len()).entered();

    let is_wall = |idx: NodeIndex| skip_forbidden && graph.location(idx).is_forbidden();

    // Discovered-set local to this call. Forbidden starts are marked here too
    // so a repeated start name is never enqueued twice.
    let mut discovered: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut queue: VecDeque<NodeIndex> = VecDeque::with_capacity(start_indices.len());
    for idx in start_indices {
        if discovered.insert(idx) {
            queue.push_back(idx);
        }
    }

    let mut reached: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut walled_starts = 0usize;

    while let Some(current) = queue.pop_front() {
        if is_wall(current) {
            walled_starts += 1;
            continue;
        }
        reached.insert(current);

        for neighbor in graph.neighbor_indices(current, flow) {
            if is_wall(neighbor) {
                continue;
            }
            if discovered.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!(
        %flow,
        reached = reached.len(),
        discovered = discovered.len(),
        walled_starts,
        "reachability traversal complete"
    );
    Ok(reached)
}

/// Resolve every start name up front so a bad name fails the whole call.
fn resolve_starts<S: AsRef<str>>(
    graph: &LocationGraph,
    starts: &[S],
) -> GraphResult<Vec<NodeIndex>> {
    if starts.is_empty() {
        return Err(GraphError::invalid_argument("start list must not be empty"));
    }
    starts
        .iter()
        .map(|name| graph.index_of(name.as_ref()))
        .collect()
}

pub(crate) fn names_of(
    graph: &LocationGraph,
    indices: impl Iterator<Item = NodeIndex>,
) -> BTreeSet<String> {
    indices
        .map(|idx| graph.location(idx).name().to_string())
        .collect()
}
