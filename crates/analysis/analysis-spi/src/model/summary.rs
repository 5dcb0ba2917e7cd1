//! Dashboard-style summaries of a single metric.

use super::{Statistic, TrendDirection};
use serde::{Deserialize, Serialize};

/// Latest value compared with the one before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestChange {
    pub latest: f64,
    pub previous: f64,
    /// Percent change from `previous` to `latest`.
    pub change: Statistic,
    pub trend: TrendDirection,
}

/// One equal-width bucket of a value distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}
