//! Configuration management for the rating system
//!
//! This module handles configuration loading from environment variables and
//! TOML, validation, and default values.

pub mod rating;

// Re-export commonly used types
pub use rating::Glicko2Config;
