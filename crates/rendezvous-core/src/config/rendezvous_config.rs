//! Top-level rendezvous configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{InputConfig, TraversalConfig};
use crate::errors::ConfigError;

pub const ENV_SKIP_FORBIDDEN: &str = "RENDEZVOUS_TRAVERSAL_SKIP_FORBIDDEN";
pub const ENV_PARALLEL: &str = "RENDEZVOUS_TRAVERSAL_PARALLEL";
pub const ENV_AVOID_MARKER: &str = "RENDEZVOUS_INPUT_AVOID_MARKER";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RENDEZVOUS_*`)
/// 3. Config file (`--config <path>`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RendezvousConfig {
    pub traversal: TraversalConfig,
    pub input: InputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub skip_forbidden: Option<bool>,
    pub parallel: Option<bool>,
    pub avoid_marker: Option<String>,
}

impl RendezvousConfig {
    /// Load configuration with layered resolution.
    ///
    /// A `config_path` that does not exist is an error; omitting it skips
    /// the file layer.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            Self::merge_toml_file(&mut config, path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RendezvousConfig) -> Result<(), ConfigError> {
        if let Some(ref marker) = config.input.avoid_marker {
            if marker.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "input.avoid_marker".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RendezvousConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RendezvousConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut RendezvousConfig, other: &RendezvousConfig) {
        if other.traversal.skip_forbidden.is_some() {
            base.traversal.skip_forbidden = other.traversal.skip_forbidden;
        }
        if other.traversal.parallel.is_some() {
            base.traversal.parallel = other.traversal.parallel;
        }
        if other.input.avoid_marker.is_some() {
            base.input.avoid_marker = other.input.avoid_marker.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut RendezvousConfig) {
        if let Ok(val) = std::env::var(ENV_SKIP_FORBIDDEN) {
            if let Ok(v) = val.parse::<bool>() {
                config.traversal.skip_forbidden = Some(v);
            }
        }
        if let Ok(val) = std::env::var(ENV_PARALLEL) {
            if let Ok(v) = val.parse::<bool>() {
                config.traversal.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var(ENV_AVOID_MARKER) {
            config.input.avoid_marker = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut RendezvousConfig, cli: &CliOverrides) {
        if let Some(v) = cli.skip_forbidden {
            config.traversal.skip_forbidden = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.traversal.parallel = Some(v);
        }
        if let Some(ref v) = cli.avoid_marker {
            config.input.avoid_marker = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
