//! Analysis API
//!
//! Configuration types for descriptive statistics, anomaly detection,
//! trend classification and dataset reports.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use analysis_spi::{
    AnalysisError, AnalysisReport, AnalysisResult, CorrelationMatrix, HistogramBucket, Insight,
    LatestChange, MetricSummary, Result, Statistic, TrendAnalysis, TrendDirection,
    UndefinedReason,
};

// ============================================================================
// Sequence Configuration
// ============================================================================

/// Anomaly detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// A value is anomalous when it deviates from the mean by more than
    /// this many sample standard deviations (default: 2.0).
    pub sigma_multiplier: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            sigma_multiplier: 2.0,
        }
    }
}

impl AnomalyConfig {
    pub fn new(sigma_multiplier: f64) -> Self {
        Self { sigma_multiplier }
    }

    pub fn validate(&self) -> Result<()> {
        non_negative("sigma_multiplier", self.sigma_multiplier)
    }
}

/// Sequence trend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Average change above which a sequence trends up, and below whose
    /// negation it trends down (default: 0.01).
    pub threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self { threshold: 0.01 }
    }
}

impl TrendConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn validate(&self) -> Result<()> {
        non_negative("threshold", self.threshold)
    }
}

// ============================================================================
// Dataset Configuration
// ============================================================================

/// Configuration for dataset-level analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Size of the recent and baseline windows (default: 30).
    pub window: usize,
    /// Change rate in percent beyond which a metric trends (default: 1.0).
    pub change_threshold: f64,
    /// Columns excluded from numeric analysis (default: `["date"]`).
    pub excluded_keys: Vec<String>,
    /// Number of histogram buckets in metric summaries (default: 10).
    pub histogram_buckets: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: 30,
            change_threshold: 1.0,
            excluded_keys: vec!["date".to_string()],
            histogram_buckets: 10,
        }
    }
}

impl AnalysisConfig {
    /// Replace the excluded keys with a single time key.
    pub fn with_time_key(mut self, key: impl Into<String>) -> Self {
        self.excluded_keys = vec![key.into()];
        self
    }

    /// Exclude one more column.
    pub fn exclude(mut self, key: impl Into<String>) -> Self {
        self.excluded_keys.push(key.into());
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(invalid("window", "must be at least 1"));
        }
        if self.histogram_buckets == 0 {
            return Err(invalid("histogram_buckets", "must be at least 1"));
        }
        non_negative("change_threshold", self.change_threshold)
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, "must be a finite, non-negative number"))
    }
}

fn invalid(name: &str, reason: &str) -> AnalysisError {
    AnalysisError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnalysisConfig, AnomalyConfig, TrendConfig};
    pub use analysis_spi::{
        AnalysisError, AnalysisReport, AnalysisResult, CorrelationComputer, CorrelationMatrix,
        Insight, InsightGenerator, MetricAnalyzer, Result, SequenceAnalyzer, Statistic,
        TrendAnalysis, TrendDirection,
    };
}
