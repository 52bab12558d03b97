//! petgraph::StableGraph wrapper with named Location nodes.

use std::collections::BTreeSet;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;
use rustc_hash::FxHashMap;

use rendezvous_core::errors::{GraphError, GraphResult};

use super::Flow;

/// A node in the location graph.
///
/// Purely structural: traversal state never lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    name: String,
    forbidden: bool,
}

impl Location {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            forbidden: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this location must be avoided by both agents.
    pub fn is_forbidden(&self) -> bool {
        self.forbidden
    }
}

/// Directed graph of uniquely named locations.
///
/// Each edge is stored once; the downstream neighbors of `from` and the
/// upstream neighbors of `to` are both views of that single edge.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    /// Edges carry no weight.
    graph: StableGraph<Location, (), Directed>,
    /// Map from location name to NodeIndex for O(1) lookup.
    node_index: FxHashMap<String, NodeIndex>,
}

impl LocationGraph {
    /// Create an empty location graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the location with the given name.
    pub fn ensure_location(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(Location::new(name));
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    /// Add a directed edge `from -> to`, creating either endpoint if absent.
    ///
    /// Duplicate edges are kept and show up as duplicate neighbor entries.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from_idx = self.ensure_location(from);
        let to_idx = self.ensure_location(to);
        self.graph.add_edge(from_idx, to_idx, ());
    }

    /// Flag an existing location as forbidden. Idempotent.
    pub fn mark_forbidden(&mut self, name: &str) -> GraphResult<()> {
        let idx = self.index_of(name)?;
        if let Some(location) = self.graph.node_weight_mut(idx) {
            location.forbidden = true;
        }
        Ok(())
    }

    /// Look up a location by name.
    pub fn get(&self, name: &str) -> GraphResult<&Location> {
        let idx = self.index_of(name)?;
        Ok(self.location(idx))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    /// All location names, in ascending order.
    pub fn names(&self) -> BTreeSet<&str> {
        self.node_index.keys().map(String::as_str).collect()
    }

    /// Names of the neighbors of `name` in the given direction.
    /// Parallel edges yield repeated entries.
    pub fn neighbors(&self, name: &str, flow: Flow) -> GraphResult<Vec<&str>> {
        let idx = self.index_of(name)?;
        Ok(self
            .neighbor_indices(idx, flow)
            .map(|n| self.location(n).name())
            .collect())
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn forbidden_count(&self) -> usize {
        self.graph
            .node_weights()
            .filter(|location| location.is_forbidden())
            .count()
    }

    pub(crate) fn index_of(&self, name: &str) -> GraphResult<NodeIndex> {
        self.node_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::not_found(name))
    }

    /// Indices always come from `node_index` and nodes are never removed.
    pub(crate) fn location(&self, idx: NodeIndex) -> &Location {
        &self.graph[idx]
    }

    pub(crate) fn neighbor_indices(
        &self,
        idx: NodeIndex,
        flow: Flow,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, flow.direction())
    }
}
