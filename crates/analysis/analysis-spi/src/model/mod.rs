//! Data models for analysis results.

mod analysis_result;
mod correlation_matrix;
mod insight;
mod report;
mod statistic;
mod summary;
mod trend;

pub use analysis_result::AnalysisResult;
pub use correlation_matrix::CorrelationMatrix;
pub use insight::Insight;
pub use report::{AnalysisReport, MetricSummary};
pub use statistic::{Statistic, UndefinedReason};
pub use summary::{HistogramBucket, LatestChange};
pub use trend::{TrendAnalysis, TrendDirection};
