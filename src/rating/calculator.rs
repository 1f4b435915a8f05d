//! Rating calculator trait and the Glicko-2 implementation
//!
//! The calculator owns a validated [`Glicko2Config`] so callers configure the
//! system constant once per deployment instead of threading it through every
//! call.

use crate::config::Glicko2Config;
use crate::error::{RatingError, Result};
use crate::rating::glicko2::{apply_inactivity_decay, expected_score, rating_period, update_rating};
use crate::types::{GameOutcome, Rating, RatingChange};

/// Trait for calculating rating changes after a rating period
pub trait RatingCalculator: Send + Sync {
    /// Calculate the rating change for one competitor over one period
    ///
    /// # Arguments
    /// * `subject` - The competitor's rating before the period
    /// * `outcomes` - Every game the competitor played in the period
    ///
    /// # Returns
    /// The posterior rating together with the intermediate estimates
    fn calculate_rating_change(
        &self,
        subject: &Rating,
        outcomes: &[GameOutcome],
    ) -> Result<RatingChange>;

    /// Rating for a competitor who sat out the period
    fn apply_inactivity(&self, rating: &Rating) -> Result<Rating>;

    /// Get the initial rating for new competitors
    fn get_initial_rating(&self) -> Rating;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> Result<()>;
}

/// Glicko-2 rating calculator
#[derive(Debug, Clone)]
pub struct Glicko2RatingCalculator {
    config: Glicko2Config,
}

impl Glicko2RatingCalculator {
    /// Create a new Glicko-2 rating calculator
    pub fn new(config: Glicko2Config) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Configuration the calculator was built with
    pub fn settings(&self) -> &Glicko2Config {
        &self.config
    }

    /// Posterior rating from parallel opponent and score lists
    pub fn update_rating(
        &self,
        subject: &Rating,
        opponents: &[Rating],
        scores: &[f64],
    ) -> Result<Rating> {
        update_rating(subject, opponents, scores, &self.config)
    }

    /// Replace `subject` with its posterior rating.
    ///
    /// On error `subject` is left exactly as it was.
    pub fn update_in_place(
        &self,
        subject: &mut Rating,
        opponents: &[Rating],
        scores: &[f64],
    ) -> Result<()> {
        *subject = update_rating(subject, opponents, scores, &self.config)?;
        Ok(())
    }

    /// Average probability of `subject` beating each of `opponents`
    pub fn calculate_expected_score(&self, subject: &Rating, opponents: &[Rating]) -> f64 {
        if opponents.is_empty() {
            return 0.5; // Neutral expectation when no opponents
        }

        let total: f64 = opponents
            .iter()
            .map(|opponent| expected_score(subject, opponent))
            .sum();

        total / opponents.len() as f64
    }
}

impl Default for Glicko2RatingCalculator {
    fn default() -> Self {
        Self {
            config: Glicko2Config::default(),
        }
    }
}

impl RatingCalculator for Glicko2RatingCalculator {
    fn calculate_rating_change(
        &self,
        subject: &Rating,
        outcomes: &[GameOutcome],
    ) -> Result<RatingChange> {
        rating_period(subject, outcomes, &self.config)
    }

    fn apply_inactivity(&self, rating: &Rating) -> Result<Rating> {
        apply_inactivity_decay(rating)
    }

    fn get_initial_rating(&self) -> Rating {
        self.config.initial_rating()
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: Glicko2Config =
            serde_json::from_value(config).map_err(|e| RatingError::ConfigurationError {
                message: format!("Invalid Glicko-2 configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}
