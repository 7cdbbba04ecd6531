//! Error types for the sales-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting operations.
///
/// Every variant is recoverable by the caller. Operations that fail return
/// no partial forecasts or metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Not enough observations for the requested operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Model name not present in the registry.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Malformed arguments (non-finite values, mismatched lengths, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A metric is statistically undefined for the given inputs.
    #[error("degenerate metrics: {0}")]
    DegenerateMetrics(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = ForecastError::InsufficientData { needed: 2, got: 1 };
        assert_eq!(err.to_string(), "insufficient data: need at least 2, got 1");

        let err = ForecastError::UnknownModel("ARIMA".to_string());
        assert_eq!(err.to_string(), "unknown model: ARIMA");

        let err = ForecastError::InvalidInput("horizon must be at least 1".to_string());
        assert_eq!(err.to_string(), "invalid input: horizon must be at least 1");

        let err = ForecastError::DegenerateMetrics("actual values have zero variance".into());
        assert_eq!(
            err.to_string(),
            "degenerate metrics: actual values have zero variance"
        );
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = ForecastError::UnknownModel("x".into());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
        assert_ne!(err1, ForecastError::UnknownModel("y".into()));
    }
}
