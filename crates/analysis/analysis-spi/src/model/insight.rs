//! Human-readable insights.

use super::{Statistic, TrendDirection};
use serde::{Deserialize, Serialize};

/// A templated insight derived from exactly one analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recommendation: Option<String>,
    pub metric: String,
    /// Absolute change rate in percent.
    pub magnitude: Statistic,
    pub trend: TrendDirection,
    /// Inverted coefficient of variation, clamped to `[0, 1]`.
    pub confidence: Statistic,
}
