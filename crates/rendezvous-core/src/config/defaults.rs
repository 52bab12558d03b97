//! Compiled defaults for every optional config value.

pub const DEFAULT_SKIP_FORBIDDEN: bool = true;
pub const DEFAULT_PARALLEL: bool = false;
pub const DEFAULT_AVOID_MARKER: &str = "Avoid:";
