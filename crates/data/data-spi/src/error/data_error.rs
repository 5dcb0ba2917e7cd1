//! Dataset error types.

use thiserror::Error;

/// Dataset access errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// A column required by the caller is absent from every row
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// A column exists but holds no numeric values
    #[error("Column '{0}' has no numeric values")]
    NonNumericColumn(String),
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;
