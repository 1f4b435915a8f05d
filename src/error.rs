//! Error types for rating calculations
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate. Callers that need to branch on the failure kind can
//! `downcast_ref::<RatingError>()` the returned error.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Numerical domain violation: {reason}")]
    DomainError { reason: String },

    #[error("Volatility did not converge after {iterations} iterations")]
    NonConvergence { iterations: usize },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
