//! Error types for analysis.
//!
//! Per-metric and per-cell failures are carried as [`crate::Statistic::Undefined`]
//! values instead; these errors are for whole-call failures.

mod analysis_error;

pub use analysis_error::{AnalysisError, Result};
