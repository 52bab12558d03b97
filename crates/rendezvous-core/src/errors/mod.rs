//! Error handling for rendezvous.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod input_error;

pub use config_error::ConfigError;
pub use error_code::RendezvousErrorCode;
pub use graph_error::{GraphError, GraphResult};
pub use input_error::{InputError, InputResult};
