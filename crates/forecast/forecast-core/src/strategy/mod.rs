//! Forecasting strategy implementations.

mod configured;
mod driver_regression;
mod linear_trend;

pub use configured::{ConfiguredModel, ConfiguredStrategy};
pub use driver_regression::{DriverRegressionModel, DriverRegressionStrategy};
pub use linear_trend::{LinearTrendModel, LinearTrendStrategy};

use forecast_spi::{ForecastError, Observations, Result};

/// `(time index, target)` for every observation carrying a target.
pub(crate) fn target_points(observations: &Observations) -> Vec<(f64, f64)> {
    observations
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(i, row)| row.target.map(|y| (i as f64, y)))
        .collect()
}

pub(crate) fn require_targets(observations: &Observations) -> Result<()> {
    match observations.target_count() {
        0 => Err(ForecastError::DataInsufficient {
            required: 1,
            actual: 0,
        }),
        _ => Ok(()),
    }
}

pub(crate) fn require_horizon(horizon: usize) -> Result<()> {
    if horizon == 0 {
        return Err(ForecastError::InvalidHorizon(horizon));
    }
    Ok(())
}
