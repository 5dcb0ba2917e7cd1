//! Linear trend strategy
//!
//! Ordinary least squares of the target on the time index. Feature columns
//! are ignored.

use super::{require_horizon, require_targets, target_points};
use crate::linalg::Line;
use forecast_spi::{ForecastError, ForecastingStrategy, Observations, Result};
use serde::{Deserialize, Serialize};

/// Fitted trend line and the time index of the first forecast step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearTrendModel {
    pub line: Line,
    pub next_index: usize,
    pub r_squared: f64,
}

/// Target-on-time regression.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTrendStrategy;

impl LinearTrendStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ForecastingStrategy for LinearTrendStrategy {
    type Model = LinearTrendModel;

    fn name(&self) -> &str {
        "linear_trend"
    }

    fn train(&self, observations: &Observations) -> Result<LinearTrendModel> {
        require_targets(observations)?;
        let points = target_points(observations);
        let line = Line::fit(&points).ok_or(ForecastError::DataInsufficient {
            required: 1,
            actual: 0,
        })?;

        Ok(LinearTrendModel {
            line,
            next_index: observations.len(),
            r_squared: r_squared(&points, &line),
        })
    }

    fn predict(&self, model: &LinearTrendModel, horizon: usize) -> Result<Vec<f64>> {
        require_horizon(horizon)?;
        Ok((0..horizon)
            .map(|h| model.line.at((model.next_index + h) as f64))
            .collect())
    }
}

fn r_squared(points: &[(f64, f64)], line: &Line) -> f64 {
    let mean = points.iter().map(|p| p.1).sum::<f64>() / points.len() as f64;
    let ss_tot: f64 = points.iter().map(|p| (p.1 - mean).powi(2)).sum();
    let ss_res: f64 = points.iter().map(|&(t, y)| (y - line.at(t)).powi(2)).sum();
    if ss_tot < f64::EPSILON {
        1.0
    } else {
        (1.0 - ss_res / ss_tot).max(0.0)
    }
}
