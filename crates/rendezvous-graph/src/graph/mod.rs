//! Location graph: an arena of named locations over `petgraph::StableGraph`.

pub mod flow;
pub mod location_graph;

pub use flow::Flow;
pub use location_graph::{Location, LocationGraph};
