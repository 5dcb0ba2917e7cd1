//! Forecast evaluation pipeline
//!
//! Predictions → anomalies → trend → confidence, shared by the primary
//! forecast and scenario simulations.

use analysis_core::sample_variance;
use analysis_spi::{SequenceAnalyzer, TrendAnalysis};
use forecast_spi::{ForecastError, ForecastResult, ForecastingStrategy, Observations, Result};
use tracing::debug;

/// Standard-error confidence: `clamp(1 - sqrt(var / n), 0, 1)` with the
/// sample variance. Zero below two predictions.
pub fn forecast_confidence(predictions: &[f64]) -> f64 {
    let n = predictions.len();
    match sample_variance(predictions).value() {
        Some(variance) if n >= 2 => (1.0 - (variance / n as f64).sqrt()).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Wrap raw predictions with anomaly flags, trend and confidence.
pub fn evaluate_forecast<A: SequenceAnalyzer + ?Sized>(
    predictions: Vec<f64>,
    analyzer: &A,
) -> Result<ForecastResult> {
    if let Some(i) = predictions.iter().position(|p| !p.is_finite()) {
        return Err(ForecastError::Numerical(format!(
            "prediction {} is not finite",
            i
        )));
    }

    let anomalies = analyzer.detect_anomalies(&predictions);
    let trend = if predictions.len() < 2 {
        TrendAnalysis::flat()
    } else {
        analyzer.analyze_trend(&predictions)?
    };
    let confidence = forecast_confidence(&predictions);

    Ok(ForecastResult {
        predictions,
        confidence,
        anomalies,
        trend,
    })
}

/// Holdout accuracy `clamp(1 - RMSE / mean|y|, 0, 1)`.
///
/// The most recent `ratio` share of rows is held out, a separate model is
/// trained on the rest and asked to predict across the holdout. `None`
/// when the holdout has no targets, its targets average to zero in
/// magnitude, or the earlier rows cannot be trained on.
pub fn holdout_accuracy<S: ForecastingStrategy + ?Sized>(
    strategy: &S,
    observations: &Observations,
    ratio: f64,
) -> Option<f64> {
    let n = observations.len();
    let holdout = (n as f64 * ratio).floor() as usize;
    if holdout == 0 || holdout >= n {
        return None;
    }

    let (train, test) = observations.split_at(n - holdout);
    let predictions = match strategy
        .train(&train)
        .and_then(|model| strategy.predict(&model, holdout))
    {
        Ok(predictions) => predictions,
        Err(e) => {
            debug!(strategy = strategy.name(), error = %e, "holdout fit failed");
            return None;
        }
    };

    let pairs: Vec<(f64, f64)> = predictions
        .iter()
        .zip(test.rows())
        .filter_map(|(&p, row)| row.target.map(|y| (p, y)))
        .collect();
    if pairs.is_empty() {
        return None;
    }

    let count = pairs.len() as f64;
    let mean_abs = pairs.iter().map(|(_, y)| y.abs()).sum::<f64>() / count;
    if mean_abs < f64::EPSILON {
        return None;
    }
    let rmse = (pairs.iter().map(|(p, y)| (p - y).powi(2)).sum::<f64>() / count).sqrt();
    let accuracy = (1.0 - rmse / mean_abs).clamp(0.0, 1.0);
    accuracy.is_finite().then_some(accuracy)
}
