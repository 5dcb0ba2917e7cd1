//! Forecast output

use analysis_spi::TrendAnalysis;
use serde::{Deserialize, Serialize};

/// Multi-step forecast with its derived diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// One value per future period; length equals the horizon.
    pub predictions: Vec<f64>,
    /// Standard-error based score in `[0, 1]`.
    pub confidence: f64,
    /// Indices into `predictions` flagged as outliers.
    pub anomalies: Vec<usize>,
    pub trend: TrendAnalysis,
}

impl ForecastResult {
    pub fn horizon(&self) -> usize {
        self.predictions.len()
    }
}
