//! RendezvousErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so front ends can print
/// `[ERROR_CODE] message` without matching on variants.
pub trait RendezvousErrorCode {
    /// Returns the error code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
