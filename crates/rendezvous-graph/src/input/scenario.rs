use crate::graph::LocationGraph;

/// A fully built graph plus the two agents' start lists.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    pub graph: LocationGraph,
    /// Starts of the agent moving downstream.
    pub first_starts: Vec<String>,
    /// Starts of the agent moving upstream.
    pub second_starts: Vec<String>,
}
