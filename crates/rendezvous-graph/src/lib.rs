//! # rendezvous-graph
//!
//! Directed location graph with forbidden locations, directional
//! reachability, and meeting-point computation for two agents: one moving
//! downstream, one moving upstream.

pub mod graph;
pub mod input;
pub mod traversal;

pub use graph::{Flow, Location, LocationGraph};
pub use input::{parse_scenario, parse_scenario_str, Scenario};
pub use traversal::{meeting_points, reachable_set, MeetingReport, TraversalEngine};
