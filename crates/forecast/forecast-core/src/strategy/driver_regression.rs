//! Driver regression strategy
//!
//! Ridge regression of the target on the time index and every feature
//! column, all standardised over the training rows. Forecasting needs
//! future feature values, so each feature is extrapolated by its own
//! least-squares trend and fed through the fitted coefficients. What-if
//! models keep the fitted coefficients and swap in projections from an
//! adjusted copy of the history.

use super::{require_horizon, require_targets};
use crate::linalg::{solve, Line};
use forecast_spi::{ForecastError, ForecastingStrategy, Observations, Result};
use serde::{Deserialize, Serialize};

/// Standardised regressor: `coefficient * (x - mean) / scale`.
///
/// Columns without spread over the training rows are inactive and carry a
/// zero coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regressor {
    pub mean: f64,
    pub scale: f64,
    pub coefficient: f64,
}

impl Regressor {
    fn contribution(&self, x: f64) -> f64 {
        if self.scale > 0.0 {
            self.coefficient * (x - self.mean) / self.scale
        } else {
            0.0
        }
    }
}

/// Fitted driver model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRegressionModel {
    /// Mean of the training targets.
    pub intercept: f64,
    pub time: Regressor,
    /// One regressor per feature column, in column order.
    pub drivers: Vec<Regressor>,
    /// Projection of each feature column over time.
    pub driver_trends: Vec<Line>,
    pub next_index: usize,
}

impl DriverRegressionModel {
    /// Model output at time index `t` with the given feature values.
    pub fn evaluate(&self, t: f64, features: &[f64]) -> f64 {
        self.intercept
            + self.time.contribution(t)
            + self
                .drivers
                .iter()
                .zip(features)
                .map(|(driver, &x)| driver.contribution(x))
                .sum::<f64>()
    }
}

/// Ridge regression on time and driver columns.
#[derive(Debug, Clone)]
pub struct DriverRegressionStrategy {
    ridge_penalty: f64,
}

impl DriverRegressionStrategy {
    pub fn new(ridge_penalty: f64) -> Self {
        Self { ridge_penalty }
    }

    pub fn ridge_penalty(&self) -> f64 {
        self.ridge_penalty
    }
}

impl Default for DriverRegressionStrategy {
    fn default() -> Self {
        Self::new(1e-3)
    }
}

impl ForecastingStrategy for DriverRegressionStrategy {
    type Model = DriverRegressionModel;

    fn name(&self) -> &str {
        "driver_regression"
    }

    fn train(&self, observations: &Observations) -> Result<DriverRegressionModel> {
        self.fit(observations, observations)
    }

    /// Coefficients and standardisation come from `observations`; only the
    /// driver projections are fitted on `adjusted`, so a rescaled driver
    /// column moves the forecast instead of being absorbed.
    fn train_adjusted(
        &self,
        observations: &Observations,
        adjusted: &Observations,
    ) -> Result<DriverRegressionModel> {
        if !observations.same_schema(adjusted) || observations.len() != adjusted.len() {
            return Err(ForecastError::SchemaMismatch {
                expected: observations.columns(),
                actual: adjusted.columns(),
            });
        }
        self.fit(observations, adjusted)
    }

    fn predict(&self, model: &DriverRegressionModel, horizon: usize) -> Result<Vec<f64>> {
        require_horizon(horizon)?;
        if model.drivers.len() != model.driver_trends.len() {
            return Err(ForecastError::Numerical(
                "driver projections do not match the fitted drivers".to_string(),
            ));
        }

        Ok((0..horizon)
            .map(|h| {
                let t = (model.next_index + h) as f64;
                let features: Vec<f64> = model.driver_trends.iter().map(|line| line.at(t)).collect();
                model.evaluate(t, &features)
            })
            .collect())
    }
}

impl DriverRegressionStrategy {
    // `projections` shares the layout and length of `observations`.
    fn fit(
        &self,
        observations: &Observations,
        projections: &Observations,
    ) -> Result<DriverRegressionModel> {
        require_targets(observations)?;
        let width = observations.feature_names().len();

        let fill: Vec<f64> = (0..width)
            .map(|j| feature_points(observations, j))
            .map(|points| points_mean(&points))
            .collect();
        let driver_trends: Vec<Line> = (0..width)
            .map(|j| {
                let points = feature_points(projections, j);
                Line::fit(&points).unwrap_or_else(|| Line::flat(points_mean(&points)))
            })
            .collect();

        // Design columns: time first, then features; rows with a target only.
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); width + 1];
        let mut targets = Vec::new();
        for (i, row) in observations.rows().iter().enumerate() {
            let Some(y) = row.target else { continue };
            columns[0].push(i as f64);
            for j in 0..width {
                columns[j + 1].push(row.features[j].unwrap_or(fill[j]));
            }
            targets.push(y);
        }

        let n = targets.len() as f64;
        let intercept = targets.iter().sum::<f64>() / n;
        let mut regressors: Vec<Regressor> = columns.iter().map(|c| standardise(c)).collect();

        let active: Vec<usize> = (0..regressors.len())
            .filter(|&k| regressors[k].scale > 0.0)
            .collect();

        if !active.is_empty() {
            let z: Vec<Vec<f64>> = active
                .iter()
                .map(|&k| {
                    let r = &regressors[k];
                    columns[k].iter().map(|x| (x - r.mean) / r.scale).collect()
                })
                .collect();

            let penalty = self.ridge_penalty * n;
            let p = active.len();
            let mut gram = vec![vec![0.0; p]; p];
            let mut rhs = vec![0.0; p];
            for a in 0..p {
                for b in a..p {
                    let dot: f64 = z[a].iter().zip(&z[b]).map(|(u, v)| u * v).sum();
                    gram[a][b] = dot;
                    gram[b][a] = dot;
                }
                gram[a][a] += penalty;
                rhs[a] = z[a]
                    .iter()
                    .zip(&targets)
                    .map(|(u, y)| u * (y - intercept))
                    .sum();
            }

            let beta = solve(gram, rhs)?;
            for (&k, coefficient) in active.iter().zip(beta) {
                regressors[k].coefficient = coefficient;
            }
        }

        let time = regressors.remove(0);
        Ok(DriverRegressionModel {
            intercept,
            time,
            drivers: regressors,
            driver_trends,
            next_index: observations.len(),
        })
    }
}

// (time index, value) for every observed value of feature `j`.
fn feature_points(observations: &Observations, j: usize) -> Vec<(f64, f64)> {
    observations
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(i, row)| row.features[j].map(|x| (i as f64, x)))
        .collect()
}

fn points_mean(points: &[(f64, f64)]) -> f64 {
    if points.is_empty() {
        0.0
    } else {
        points.iter().map(|p| p.1).sum::<f64>() / points.len() as f64
    }
}

// Population mean and standard deviation; scale 0 marks a constant column.
fn standardise(values: &[f64]) -> Regressor {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
    let scale = if std > 1e-12 * (1.0 + mean.abs()) {
        std
    } else {
        0.0
    };
    Regressor {
        mean,
        scale,
        coefficient: 0.0,
    }
}
