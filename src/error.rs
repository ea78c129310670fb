//! Error types for the supplychain-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while computing forecasts and metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Every observation was excluded (e.g. all actuals are zero).
    #[error("no valid observations to compute the metric")]
    NoValidObservations,

    /// A variance used as a denominator is zero.
    #[error("zero variance: {0}")]
    ZeroVariance(String),

    /// No seasonal index is available for the requested product.
    #[error("no seasonal index available for product '{0}'")]
    MissingIndex(String),

    /// A pair has no series of the given kind (e.g. no shipments).
    #[error("no {kind} recorded for {pair}")]
    MissingSeries { kind: &'static str, pair: String },

    /// Malformed input record.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::Io(err.to_string())
    }
}
