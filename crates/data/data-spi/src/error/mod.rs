//! Error types for dataset access.

mod data_error;

pub use data_error::{DataError, Result};
