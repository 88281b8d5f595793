//! Error types for the resource calculator

use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Error types that can occur when validating or rendering an estimate.
///
/// The estimator itself never fails; these are raised only by strict input
/// validation and by report serialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Invalid dimensions: {value} (expected {min}..={max})")]
    InvalidDimensions { value: u64, min: u64, max: u64 },

    #[error("Invalid object count: {value} (expected at least {min})")]
    InvalidObjectCount { value: u64, min: u64 },

    #[error("Invalid max connections: {value} (expected {min}..={max})")]
    InvalidMaxConnections { value: u64, min: u64, max: u64 },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
