//! # rendezvous-core
//!
//! Foundation crate for the rendezvous workspace.
//! Errors, configuration, and tracing setup used by every other crate.

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::RendezvousConfig;
pub use errors::{ConfigError, GraphError, GraphResult, InputError, InputResult};
