//! Trend classification types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    /// `Up` above `threshold`, `Down` below `-threshold`, otherwise `Stable`.
    pub fn classify(change: f64, threshold: f64) -> Self {
        if change > threshold {
            TrendDirection::Up
        } else if change < -threshold {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Trend descriptor for a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    /// Normalized magnitude of the average change, in `[0, 1]`.
    pub strength: f64,
}

impl TrendAnalysis {
    pub fn new(direction: TrendDirection, strength: f64) -> Self {
        Self {
            direction,
            strength: strength.clamp(0.0, 1.0),
        }
    }

    /// No measurable trend.
    pub fn flat() -> Self {
        Self::new(TrendDirection::Stable, 0.0)
    }
}
