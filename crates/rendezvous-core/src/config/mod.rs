//! Configuration system for rendezvous.
//! TOML-based, 3-layer resolution: CLI > env > config file > defaults.

pub mod defaults;
pub mod input_config;
pub mod rendezvous_config;
pub mod traversal_config;

pub use input_config::InputConfig;
pub use rendezvous_config::{CliOverrides, RendezvousConfig};
pub use traversal_config::TraversalConfig;
