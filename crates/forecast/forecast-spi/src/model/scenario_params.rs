//! What-if scenario inputs

use serde::{Deserialize, Serialize};

/// Signed percentage adjustments applied to driver columns.
///
/// Each value scales its bound column by `1 + value / 100`. Bounds are a
/// presentation concern; the engine accepts any finite value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub marketing_budget: f64,
    pub pricing: f64,
    pub seasonality: f64,
    pub competitor_activity: f64,
}

impl ScenarioParams {
    pub fn new(marketing_budget: f64, pricing: f64, seasonality: f64) -> Self {
        Self {
            marketing_budget,
            pricing,
            seasonality,
            competitor_activity: 0.0,
        }
    }

    pub fn with_competitor_activity(mut self, competitor_activity: f64) -> Self {
        self.competitor_activity = competitor_activity;
        self
    }

    /// Multiplicative factor for a percentage adjustment.
    pub fn factor(percent: f64) -> f64 {
        1.0 + percent / 100.0
    }
}
