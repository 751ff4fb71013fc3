//! Simulator configuration from environment variables.

use std::env;

use crate::color::{ColorMatcher, DEFAULT_CUTOFF};

/// Simulator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Similarity a colour must reach to be accepted, in `[0, 1]`.
    pub color_cutoff: f64,
    /// Seed for fact selection; `None` draws from the thread RNG.
    pub fact_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            color_cutoff: DEFAULT_CUTOFF,
            fact_seed: None,
        }
    }
}

impl SimConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `CATSIM_LOG_LEVEL`: Logging level (default: "info")
    /// - `CATSIM_COLOR_CUTOFF`: Colour match cutoff (default: 0.6)
    /// - `CATSIM_FACT_SEED`: Seed for fact selection (default: unseeded)
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level = env::var("CATSIM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let color_cutoff = match env::var("CATSIM_COLOR_CUTOFF") {
            Ok(raw) => parse_cutoff("CATSIM_COLOR_CUTOFF", &raw)?,
            Err(_) => DEFAULT_CUTOFF,
        };

        let fact_seed = match env::var("CATSIM_FACT_SEED") {
            Ok(raw) => Some(raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                name: "CATSIM_FACT_SEED".to_string(),
                reason: format!("{e}"),
            })?),
            Err(_) => None,
        };

        Ok(Self {
            log_level,
            color_cutoff,
            fact_seed,
        })
    }

    /// Colour matcher for this configuration.
    #[must_use]
    pub fn color_matcher(&self) -> ColorMatcher {
        ColorMatcher::new(self.color_cutoff)
    }
}

/// Parses a colour cutoff, which must be a number in `[0, 1]`.
pub fn parse_cutoff(name: &str, raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: format!("{e}"),
    })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("{value} is outside [0, 1]"),
        });
    }
    Ok(value)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
