//! Tracing setup and span names.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
