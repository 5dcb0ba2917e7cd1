//! Engine model metrics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the engine's trained state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelMetrics {
    /// When the current model finished training; `None` before initialization.
    pub last_update: Option<DateTime<Utc>>,
    /// Observations held by the engine.
    pub data_points: usize,
    /// Holdout accuracy in `[0, 1]`, when it can be computed.
    pub accuracy: Option<f64>,
}

impl ModelMetrics {
    /// Metrics of an engine that has never trained.
    pub fn uninitialized() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized() {
        let metrics = ModelMetrics::uninitialized();
        assert_eq!(metrics.data_points, 0);
        assert!(metrics.last_update.is_none());
        assert!(metrics.accuracy.is_none());
    }

    #[test]
    fn test_serializes_timestamp_as_rfc3339() {
        let metrics = ModelMetrics {
            last_update: DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
                .ok()
                .map(|t| t.with_timezone(&Utc)),
            data_points: 24,
            accuracy: Some(0.9),
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["last_update"], "2024-06-01T12:00:00Z");
        assert_eq!(json["data_points"], 24);
    }
}
