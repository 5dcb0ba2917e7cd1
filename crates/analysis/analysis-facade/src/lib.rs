//! Analysis Facade
//!
//! High-level API for dataset analysis. Re-exports the analysis stack and
//! the dataset model it operates on.

// Re-export everything from API (which includes SPI types)
pub use analysis_api::*;

pub use analysis_api::prelude;

// Re-export core modules for direct access
pub use analysis_core::{correlation, descriptive, insight, report, sequence, summary};

pub use analysis_core::{
    analyze_dataset, change_rate, cv_confidence, histogram, mean, median, pearson,
    sample_std_dev, sample_variance, summarize_latest, DescriptiveAnalyzer, PearsonCorrelation,
    SequenceStats, TemplateInsightGenerator,
};

// Re-export SPI traits
pub use analysis_spi::{CorrelationComputer, InsightGenerator, MetricAnalyzer, SequenceAnalyzer};

// Dataset model
pub use data_spi::{CellValue, DataError, Dataset, Row};
