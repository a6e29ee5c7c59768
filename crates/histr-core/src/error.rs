//! Error types for histogram construction
//!
//! Provides a unified error type for all histr crates.

use thiserror::Error;

/// Core error type for histogram operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function (bad binning configuration)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a bin width that is zero, negative or not finite
    pub fn invalid_width(width: f64) -> Self {
        Self::InvalidParameter(format!("Bin width {width} must be finite and positive"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf samples handed in by the caller
    pub fn non_finite_input(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for NaN/Inf values produced while computing
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for mutually exclusive options given together
    pub fn conflicting(first: &str, second: &str) -> Self {
        Self::InvalidParameter(format!("{first} and {second} are mutually exclusive"))
    }

    /// Whether this error stems from the binning configuration rather than the samples
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}
