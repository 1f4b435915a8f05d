//! Utility functions for moving between rating scales

use crate::constants::{DEFAULT_RATING, GLICKO_SCALE};

/// Convert a natural-scale rating to the Glicko-2 scale (mu)
pub fn scale_rating(rating: f64) -> f64 {
    (rating - DEFAULT_RATING) / GLICKO_SCALE
}

/// Convert a Glicko-2 scale rating (mu) back to the natural scale
pub fn unscale_rating(scaled: f64) -> f64 {
    scaled * GLICKO_SCALE + DEFAULT_RATING
}

/// Convert a natural-scale deviation to the Glicko-2 scale (phi)
pub fn scale_deviation(deviation: f64) -> f64 {
    deviation / GLICKO_SCALE
}

/// Convert a Glicko-2 scale deviation (phi) back to the natural scale
pub fn unscale_deviation(scaled: f64) -> f64 {
    scaled * GLICKO_SCALE
}

/// Interval of `z` deviations around a rating.
///
/// `z = 1.96` gives the usual 95% confidence interval.
pub fn confidence_interval(rating: f64, deviation: f64, z: f64) -> (f64, f64) {
    (rating - z * deviation, rating + z * deviation)
}
