//! Rules configuration.
//!
//! The rule set is fixed apart from a small number of switches, which can be
//! loaded from TOML:
//!
//! ```toml
//! double_step_requires_clear_path = false
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a rules configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration is not valid TOML or contains unknown keys.
    #[error("Failed to parse rules config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configuration could not be written as TOML.
    #[error("Failed to serialize rules config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Tunable parts of the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Require the square a pawn passes over on its double step to be empty.
    ///
    /// When `false`, only the landing square is checked, so a pawn on its
    /// start row may hop over a piece directly in front of it.
    pub double_step_requires_clear_path: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            double_step_requires_clear_path: true,
        }
    }
}

impl RulesConfig {
    /// The configuration that checks only the landing square of a pawn double step.
    pub const LANDING_SQUARE_ONLY: RulesConfig = RulesConfig {
        double_step_requires_clear_path: false,
    };

    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
