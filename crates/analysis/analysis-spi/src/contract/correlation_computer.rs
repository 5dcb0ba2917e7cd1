//! Pairwise correlation trait.

use crate::model::CorrelationMatrix;
use data_spi::Dataset;

/// Computes a symmetric correlation matrix across numeric metrics.
pub trait CorrelationComputer: Send + Sync {
    fn correlate(&self, dataset: &Dataset, excluded: &[String]) -> CorrelationMatrix;
}
