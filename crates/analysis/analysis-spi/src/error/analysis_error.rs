//! Analysis error types.

use data_spi::DataError;
use thiserror::Error;

/// Analysis errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Insufficient data: required {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
