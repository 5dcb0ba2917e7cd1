//! Analysis Core
//!
//! Implementations for descriptive statistics, pairwise correlation,
//! sequence anomaly/trend analysis, insight generation and dataset reports.

pub mod correlation;
pub mod descriptive;
pub mod insight;
pub mod report;
pub mod sequence;
pub mod summary;

// Re-export SPI traits for implementations
pub use analysis_spi::{
    AnalysisError, CorrelationComputer, InsightGenerator, MetricAnalyzer, Result,
    SequenceAnalyzer,
};

// Re-export main types
pub use correlation::{pearson, PearsonCorrelation};
pub use descriptive::{change_rate, mean, median, sample_std_dev, sample_variance, DescriptiveAnalyzer};
pub use insight::{cv_confidence, TemplateInsightGenerator};
pub use report::analyze_dataset;
pub use sequence::SequenceStats;
pub use summary::{histogram, summarize_latest};
