//! Per-metric descriptive statistics.

use super::{Statistic, TrendDirection};
use serde::{Deserialize, Serialize};

/// Descriptive statistics for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub metric: String,
    /// Number of numeric values the statistics were computed over.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: Statistic,
    pub trend: TrendDirection,
    /// Recent-window mean relative to baseline-window mean, in percent.
    pub change_rate: Statistic,
}
