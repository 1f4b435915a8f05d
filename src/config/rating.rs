//! Glicko-2 system configuration
//!
//! Holds the start values for unrated competitors and the tunables of the
//! volatility solver, with environment variable and TOML loading.

use crate::constants::{
    CONVERGENCE_TOLERANCE, DEFAULT_DEVIATION, DEFAULT_MAX_ITERATIONS, DEFAULT_RATING,
    DEFAULT_VOLATILITY, DEFAULT_VOLATILITY_CONSTRAINT,
};
use crate::error::{RatingError, Result};
use crate::types::Rating;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Configuration for the Glicko-2 rating system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glicko2Config {
    /// Initial rating for new competitors
    pub default_rating: f64,
    /// Initial deviation for new competitors
    pub default_deviation: f64,
    /// Initial volatility for new competitors
    pub default_volatility: f64,
    /// System constant tau, limits how fast volatility changes
    pub volatility_constraint: f64,
    /// Bracket width at which the volatility solver stops
    pub convergence_tolerance: f64,
    /// Iteration cap for the volatility bracket search and refinement
    pub max_iterations: usize,
}

impl Default for Glicko2Config {
    fn default() -> Self {
        Self {
            default_rating: DEFAULT_RATING,
            default_deviation: DEFAULT_DEVIATION,
            default_volatility: DEFAULT_VOLATILITY,
            volatility_constraint: DEFAULT_VOLATILITY_CONSTRAINT,
            convergence_tolerance: CONVERGENCE_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Glicko2Config {
    /// Create conservative configuration (volatility moves slowly)
    pub fn conservative() -> Self {
        Self {
            volatility_constraint: 0.3,
            ..Self::default()
        }
    }

    /// Create configuration for games with many improbable results
    pub fn volatile() -> Self {
        Self {
            volatility_constraint: 1.2,
            ..Self::default()
        }
    }

    /// Rating handed to a competitor with no history
    pub fn initial_rating(&self) -> Rating {
        Rating::new(
            self.default_rating,
            self.default_deviation,
            self.default_volatility,
        )
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = parse_env("GLICKO_DEFAULT_RATING")? {
            config.default_rating = value;
        }
        if let Some(value) = parse_env("GLICKO_DEFAULT_DEVIATION")? {
            config.default_deviation = value;
        }
        if let Some(value) = parse_env("GLICKO_DEFAULT_VOLATILITY")? {
            config.default_volatility = value;
        }
        if let Some(value) = parse_env("GLICKO_VOLATILITY_CONSTRAINT")? {
            config.volatility_constraint = value;
        }
        if let Some(value) = parse_env("GLICKO_CONVERGENCE_TOLERANCE")? {
            config.convergence_tolerance = value;
        }
        if let Some(value) = parse_env("GLICKO_MAX_ITERATIONS")? {
            config.max_iterations = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| RatingError::ConfigurationError {
                message: format!("Invalid TOML configuration: {}", e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| RatingError::ConfigurationError {
                message: format!("Failed to read {}: {}", path.display(), e),
            })?;

        Self::from_toml_str(&contents)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.default_rating.is_finite() {
            return Err(configuration_error("Default rating must be finite"));
        }

        if !self.default_deviation.is_finite() || self.default_deviation <= 0.0 {
            return Err(configuration_error("Default deviation must be positive"));
        }

        if !self.default_volatility.is_finite() || self.default_volatility <= 0.0 {
            return Err(configuration_error("Default volatility must be positive"));
        }

        if !self.volatility_constraint.is_finite() || self.volatility_constraint <= 0.0 {
            return Err(configuration_error("Volatility constraint must be positive"));
        }

        if !self.convergence_tolerance.is_finite() || self.convergence_tolerance <= 0.0 {
            return Err(configuration_error("Convergence tolerance must be positive"));
        }

        if self.max_iterations == 0 {
            return Err(configuration_error("Max iterations must be greater than 0"));
        }

        Ok(())
    }
}

fn configuration_error(message: &str) -> anyhow::Error {
    RatingError::ConfigurationError {
        message: message.to_string(),
    }
    .into()
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            RatingError::ConfigurationError {
                message: format!("Invalid {} value: {}", key, raw),
            }
            .into()
        }),
        Err(_) => Ok(None),
    }
}
