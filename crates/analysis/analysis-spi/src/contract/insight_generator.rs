//! Insight generation trait.

use crate::model::{AnalysisResult, Insight};

/// Turns analysis results into human-readable insights.
pub trait InsightGenerator: Send + Sync {
    /// One insight per result, order-preserving.
    fn generate(&self, results: &[AnalysisResult]) -> Vec<Insight>;
}
