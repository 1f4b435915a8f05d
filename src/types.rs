//! Common types used throughout the rating crate

use crate::constants::{DEFAULT_DEVIATION, DEFAULT_RATING, DEFAULT_VOLATILITY};
use crate::error::RatingError;
use crate::utils::{scale_deviation, scale_rating};
use serde::{Deserialize, Serialize};
use skillratings::glicko2::Glicko2Rating;

/// A competitor's belief state at a point in time.
///
/// Natural-scale values are supplied at construction and the Glicko-2 scale
/// counterparts are computed once alongside them, so the two representations
/// can never disagree. A rating is never modified: period updates produce a
/// new value that replaces the old one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RatingRecord", into = "RatingRecord")]
pub struct Rating {
    rating: f64,
    deviation: f64,
    volatility: f64,
    scaled_rating: f64,
    scaled_deviation: f64,
}

impl Rating {
    /// Create a rating from natural-scale values.
    ///
    /// No range checks happen here; use [`Rating::validate`] when the values
    /// come from an untrusted source.
    pub fn new(rating: f64, deviation: f64, volatility: f64) -> Self {
        Self {
            rating,
            deviation,
            volatility,
            scaled_rating: scale_rating(rating),
            scaled_deviation: scale_deviation(deviation),
        }
    }

    /// Build a rating with the same volatility but a different rating and deviation
    pub fn with_rating_and_deviation(&self, rating: f64, deviation: f64) -> Self {
        Self::new(rating, deviation, self.volatility)
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Rating on the Glicko-2 scale (mu)
    pub fn scaled_rating(&self) -> f64 {
        self.scaled_rating
    }

    /// Deviation on the Glicko-2 scale (phi)
    pub fn scaled_deviation(&self) -> f64 {
        self.scaled_deviation
    }

    /// Check that the rating can be fed into a period update
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.rating.is_finite() {
            return Err(RatingError::DomainError {
                reason: format!("rating must be finite, got {}", self.rating),
            }
            .into());
        }

        if !self.deviation.is_finite() || self.deviation <= 0.0 {
            return Err(RatingError::DomainError {
                reason: format!("deviation must be positive, got {}", self.deviation),
            }
            .into());
        }

        if !self.volatility.is_finite() || self.volatility <= 0.0 {
            return Err(RatingError::DomainError {
                reason: format!("volatility must be positive, got {}", self.volatility),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::new(DEFAULT_RATING, DEFAULT_DEVIATION, DEFAULT_VOLATILITY)
    }
}

/// Serialized form of a [`Rating`]; the scaled cache is rebuilt on load
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RatingRecord {
    rating: f64,
    deviation: f64,
    volatility: f64,
}

impl From<RatingRecord> for Rating {
    fn from(record: RatingRecord) -> Self {
        Self::new(record.rating, record.deviation, record.volatility)
    }
}

impl From<Rating> for RatingRecord {
    fn from(rating: Rating) -> Self {
        Self {
            rating: rating.rating,
            deviation: rating.deviation,
            volatility: rating.volatility,
        }
    }
}

impl From<Glicko2Rating> for Rating {
    fn from(rating: Glicko2Rating) -> Self {
        Self::new(rating.rating, rating.deviation, rating.volatility)
    }
}

impl From<Rating> for Glicko2Rating {
    fn from(rating: Rating) -> Self {
        Self {
            rating: rating.rating,
            deviation: rating.deviation,
            volatility: rating.volatility,
        }
    }
}

/// One game of a rating period, seen from the subject's side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub opponent: Rating,
    /// 1.0 for a win, 0.5 for a draw, 0.0 for a loss
    pub score: f64,
}

impl GameOutcome {
    pub fn new(opponent: Rating, score: f64) -> Self {
        Self { opponent, score }
    }

    pub fn win(opponent: Rating) -> Self {
        Self::new(opponent, 1.0)
    }

    pub fn draw(opponent: Rating) -> Self {
        Self::new(opponent, 0.5)
    }

    pub fn loss(opponent: Rating) -> Self {
        Self::new(opponent, 0.0)
    }
}

/// Rating change information for one competitor over one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingChange {
    pub old_rating: Rating,
    pub new_rating: Rating,
    /// Estimated variance of the rating from game outcomes alone (v, Glicko-2 scale)
    pub estimated_variance: f64,
    /// Estimated improvement over the pre-period rating (delta, Glicko-2 scale)
    pub estimated_improvement: f64,
    /// Deviation after volatility inflation, before game information (phi*, natural scale)
    pub pre_period_deviation: f64,
    /// Secant steps taken by the volatility solver
    pub volatility_iterations: usize,
}

impl RatingChange {
    pub fn rating_delta(&self) -> f64 {
        self.new_rating.rating() - self.old_rating.rating()
    }

    pub fn deviation_delta(&self) -> f64 {
        self.new_rating.deviation() - self.old_rating.deviation()
    }
}
