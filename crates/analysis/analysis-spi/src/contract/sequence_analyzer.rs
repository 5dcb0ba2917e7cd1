//! Anomaly and trend analysis over a single numeric sequence.

use crate::error::Result;
use crate::model::TrendAnalysis;

/// Sequence analyzer trait.
///
/// Implementations must behave identically for raw historical series and
/// for generated forecasts; the forecasting engine reuses them on its own
/// output.
pub trait SequenceAnalyzer: Send + Sync {
    /// Indices of statistical outliers, ascending.
    fn detect_anomalies(&self, sequence: &[f64]) -> Vec<usize>;

    /// Direction and strength of the average period-over-period change.
    fn analyze_trend(&self, sequence: &[f64]) -> Result<TrendAnalysis>;
}
