//! Scenario input: the line-oriented text format that describes a map, the
//! locations to avoid, and both agents' start locations.

pub mod parser;
pub mod scenario;

pub use parser::{parse_scenario, parse_scenario_str};
pub use scenario::Scenario;
