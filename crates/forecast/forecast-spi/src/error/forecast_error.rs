//! Forecast error types

use analysis_spi::AnalysisError;
use data_spi::DataError;
use thiserror::Error;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Too few observations with a target value
    #[error("Insufficient data: need at least {required} observations with a target, got {actual}")]
    DataInsufficient { required: usize, actual: usize },

    /// Forecast or update requested before a successful `initialize`
    #[error("Engine has not been initialized")]
    NotInitialized,

    /// Another training operation holds the training gate
    #[error("A training operation is already in progress")]
    RetrainInProgress,

    /// Operation exceeded its configured time limit
    #[error("{operation} timed out after {limit_ms} ms")]
    Timeout { operation: String, limit_ms: u64 },

    #[error("Invalid horizon {0}: must be at least 1")]
    InvalidHorizon(usize),

    /// New observations do not share the engine's column layout
    #[error("Column layout mismatch: expected {expected:?}, got {actual:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Computation produced a non-finite or singular result
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The training worker panicked or was cancelled
    #[error("Training aborted: {0}")]
    TrainingAborted(String),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl ForecastError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ForecastError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_data_insufficient_message() {
        let error = ForecastError::DataInsufficient {
            required: 1,
            actual: 0,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 1 observations with a target, got 0"
        );
    }

    #[test]
    fn test_timeout_message() {
        let error = ForecastError::Timeout {
            operation: "training".to_string(),
            limit_ms: 250,
        };
        assert_eq!(error.to_string(), "training timed out after 250 ms");
    }

    #[test]
    fn test_schema_mismatch_message() {
        let error = ForecastError::SchemaMismatch {
            expected: vec!["budget".into(), "revenue".into()],
            actual: vec!["price".into(), "revenue".into()],
        };
        assert!(error.to_string().contains("[\"budget\", \"revenue\"]"));
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = ForecastError::invalid_parameter("holdout_ratio", "must be below 1");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'holdout_ratio': must be below 1"
        );
    }

    #[test]
    fn test_wraps_data_error() {
        let error: ForecastError = DataError::ColumnNotFound("revenue".into()).into();
        assert!(matches!(error, ForecastError::Data(_)));
        assert!(error.to_string().contains("revenue"));
    }

    #[test]
    fn test_error_is_send_sync_and_boxable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();

        let boxed: Box<dyn Error + Send + Sync> = Box::new(ForecastError::NotInitialized);
        assert_eq!(boxed.to_string(), "Engine has not been initialized");
    }
}
