//! Glicko Rating - Glicko-2 rating period updates
//!
//! This crate computes a competitor's posterior rating, deviation and
//! volatility after a rating period, following Glickman's Glicko-2 system.

pub mod config;
pub mod constants;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::Glicko2Config;
pub use rating::{Glicko2RatingCalculator, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
