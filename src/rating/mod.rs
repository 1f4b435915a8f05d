//! Glicko-2 rating period updates
//!
//! This module provides the period update procedure, the volatility solver it
//! embeds, and a configured calculator behind the `RatingCalculator` trait.

pub mod calculator;
pub mod glicko2;
pub mod volatility;

// Re-export commonly used types
pub use calculator::{Glicko2RatingCalculator, RatingCalculator};
pub use glicko2::{
    apply_inactivity_decay, expected_score, g, rating_period, update_rating,
    update_rating_with_outcomes,
};
pub use volatility::{solve_volatility, VolatilityInputs, VolatilitySolution};
