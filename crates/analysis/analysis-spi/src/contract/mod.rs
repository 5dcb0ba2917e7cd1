//! Contract definitions for analysis.
//!
//! This module contains trait definitions that providers must implement.

mod correlation_computer;
mod insight_generator;
mod metric_analyzer;
mod sequence_analyzer;

pub use correlation_computer::CorrelationComputer;
pub use insight_generator::InsightGenerator;
pub use metric_analyzer::MetricAnalyzer;
pub use sequence_analyzer::SequenceAnalyzer;
