//! Anomaly and trend analysis over a numeric sequence.
//!
//! The same analyzer runs on raw metric history and on forecast output.

use crate::descriptive::{mean, sample_std_dev};
use analysis_api::{AnomalyConfig, TrendConfig};
use analysis_spi::{AnalysisError, Result, SequenceAnalyzer, TrendAnalysis, TrendDirection};

/// Sigma-rule anomaly detector and average-change trend classifier.
#[derive(Debug, Clone, Default)]
pub struct SequenceStats {
    anomaly: AnomalyConfig,
    trend: TrendConfig,
}

impl SequenceStats {
    pub fn new(anomaly: AnomalyConfig, trend: TrendConfig) -> Self {
        Self { anomaly, trend }
    }

    pub fn anomaly_config(&self) -> &AnomalyConfig {
        &self.anomaly
    }

    pub fn trend_config(&self) -> &TrendConfig {
        &self.trend
    }
}

impl SequenceAnalyzer for SequenceStats {
    fn detect_anomalies(&self, sequence: &[f64]) -> Vec<usize> {
        let Some(mu) = mean(sequence) else {
            return Vec::new();
        };
        // Undefined below two values; a numerically zero sigma flags nothing.
        let sigma = match sample_std_dev(sequence).value() {
            Some(sigma) if sigma > f64::EPSILON * mu.abs().max(1.0) => sigma,
            _ => return Vec::new(),
        };

        let limit = self.anomaly.sigma_multiplier * sigma;
        sequence
            .iter()
            .enumerate()
            .filter(|&(_, &value)| (value - mu).abs() > limit)
            .map(|(i, _)| i)
            .collect()
    }

    fn analyze_trend(&self, sequence: &[f64]) -> Result<TrendAnalysis> {
        let n = sequence.len();
        if n < 2 {
            return Err(AnalysisError::InsufficientData {
                required: 2,
                actual: n,
            });
        }

        let average_change =
            sequence.windows(2).map(|w| w[1] - w[0]).sum::<f64>() / (n - 1) as f64;

        let base = sequence[0].abs();
        let strength = if base < f64::EPSILON {
            0.0
        } else {
            (average_change.abs() / base).min(1.0)
        };

        Ok(TrendAnalysis::new(
            TrendDirection::classify(average_change, self.trend.threshold),
            strength,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SequenceStats {
        SequenceStats::default()
    }

    #[test]
    fn test_spike_is_flagged() {
        let mut data = vec![10.0; 9];
        data.push(100.0);
        assert_eq!(analyzer().detect_anomalies(&data), vec![9]);
    }

    #[test]
    fn test_five_point_spike_stays_within_two_sigma() {
        // With n = 5 no point can sit more than (n - 1) / sqrt(n) ~ 1.79
        // sample standard deviations from the mean.
        let data = vec![10.0, 10.0, 10.0, 10.0, 100.0];
        assert!(analyzer().detect_anomalies(&data).is_empty());

        let loose = SequenceStats::new(AnomalyConfig::new(1.5), TrendConfig::default());
        assert_eq!(loose.detect_anomalies(&data), vec![4]);
    }

    #[test]
    fn test_constant_sequence_has_no_anomalies() {
        assert!(analyzer().detect_anomalies(&[5.0; 20]).is_empty());
        assert!(analyzer().detect_anomalies(&[0.1, 0.1, 0.1]).is_empty());
    }

    #[test]
    fn test_short_sequences_have_no_anomalies() {
        assert!(analyzer().detect_anomalies(&[]).is_empty());
        assert!(analyzer().detect_anomalies(&[42.0]).is_empty());
    }

    #[test]
    fn test_trend_up() {
        let trend = analyzer().analyze_trend(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
        assert!((trend.strength - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_trend_down_and_strength() {
        let trend = analyzer().analyze_trend(&[100.0, 90.0, 80.0]).unwrap();
        assert_eq!(trend.direction, TrendDirection::Down);
        assert!((trend.strength - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_trend_stable_within_threshold() {
        let trend = analyzer().analyze_trend(&[10.0, 10.005, 10.0, 10.009]).unwrap();
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_trend_zero_first_value() {
        let trend = analyzer().analyze_trend(&[0.0, 5.0, 10.0]).unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.strength, 0.0);
    }

    #[test]
    fn test_trend_negative_first_value_keeps_strength_in_range() {
        let trend = analyzer().analyze_trend(&[-10.0, -9.0, -8.0]).unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
        assert!((trend.strength - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_trend_requires_two_values() {
        let err = analyzer().analyze_trend(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }
}
