//! Analysis Service Provider Interface
//!
//! Defines traits and types for turning a tabular dataset into per-metric
//! statistics, correlation structure, anomaly flags, trend classification
//! and templated insights.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{CorrelationComputer, InsightGenerator, MetricAnalyzer, SequenceAnalyzer};
pub use error::{AnalysisError, Result};
pub use model::{
    AnalysisReport, AnalysisResult, CorrelationMatrix, HistogramBucket, Insight, LatestChange,
    MetricSummary, Statistic, TrendAnalysis, TrendDirection, UndefinedReason,
};
