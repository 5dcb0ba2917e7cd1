//! Composite analysis output for one dataset snapshot.

use super::{AnalysisResult, CorrelationMatrix, HistogramBucket, Insight, LatestChange};
use serde::{Deserialize, Serialize};

/// Latest-change and distribution view of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub metric: String,
    /// Absent when the metric has fewer than two values.
    pub latest: Option<LatestChange>,
    pub distribution: Vec<HistogramBucket>,
}

/// Everything the analysis stack derives from a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub results: Vec<AnalysisResult>,
    pub insights: Vec<Insight>,
    pub correlations: CorrelationMatrix,
    pub summaries: Vec<MetricSummary>,
}
