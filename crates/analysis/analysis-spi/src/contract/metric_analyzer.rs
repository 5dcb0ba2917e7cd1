//! Per-metric descriptive statistics trait.

use crate::model::AnalysisResult;
use data_spi::Dataset;

/// Computes descriptive statistics for every numeric metric of a dataset.
pub trait MetricAnalyzer: Send + Sync {
    /// One result per numeric metric, in column order.
    ///
    /// Columns named in `excluded` (typically the time key) are skipped.
    fn analyze(&self, dataset: &Dataset, excluded: &[String]) -> Vec<AnalysisResult>;
}
