//! Queue construction options
//!
//! Options can be built in code or read from TOML:
//!
//! ```rust
//! use patient_queue::config::QueueConfig;
//!
//! let config = QueueConfig::from_toml_str("initial_capacity = 32").unwrap();
//! assert_eq!(config.initial_capacity, 32);
//!
//! let defaults = QueueConfig::from_toml_str("").unwrap();
//! assert_eq!(defaults.initial_capacity, QueueConfig::DEFAULT_INITIAL_CAPACITY);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct QueueConfig {
    /// Slot count allocated on construction and after `clear`
    ///
    /// Slot 0 is never used, so at least two slots are needed to hold anything.
    #[serde(default = "QueueConfig::default_initial_capacity")]
    #[validate(range(min = 2))]
    pub initial_capacity: usize,
}

impl QueueConfig {
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    fn default_initial_capacity() -> usize {
        Self::DEFAULT_INITIAL_CAPACITY
    }

    /// Builds a validated config with the given initial capacity
    pub fn with_initial_capacity(initial_capacity: usize) -> Result<Self, ConfigError> {
        let config = Self { initial_capacity };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a config from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }
}
