//! Runtime strategy selection

use super::{DriverRegressionModel, DriverRegressionStrategy, LinearTrendModel, LinearTrendStrategy};
use forecast_api::{StrategyConfig, StrategyKind};
use forecast_spi::{ForecastError, ForecastingStrategy, Observations, Result};
use serde::{Deserialize, Serialize};

/// Strategy chosen from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredStrategy {
    LinearTrend(LinearTrendStrategy),
    DriverRegression(DriverRegressionStrategy),
}

/// Model trained by a [`ConfiguredStrategy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfiguredModel {
    LinearTrend(LinearTrendModel),
    DriverRegression(DriverRegressionModel),
}

impl ConfiguredStrategy {
    pub fn from_config(config: &StrategyConfig) -> Self {
        match config.kind {
            StrategyKind::LinearTrend => ConfiguredStrategy::LinearTrend(LinearTrendStrategy::new()),
            StrategyKind::DriverRegression => ConfiguredStrategy::DriverRegression(
                DriverRegressionStrategy::new(config.ridge_penalty),
            ),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            ConfiguredStrategy::LinearTrend(_) => StrategyKind::LinearTrend,
            ConfiguredStrategy::DriverRegression(_) => StrategyKind::DriverRegression,
        }
    }
}

impl Default for ConfiguredStrategy {
    fn default() -> Self {
        Self::from_config(&StrategyConfig::default())
    }
}

impl ForecastingStrategy for ConfiguredStrategy {
    type Model = ConfiguredModel;

    fn name(&self) -> &str {
        match self {
            ConfiguredStrategy::LinearTrend(s) => s.name(),
            ConfiguredStrategy::DriverRegression(s) => s.name(),
        }
    }

    fn train(&self, observations: &Observations) -> Result<ConfiguredModel> {
        Ok(match self {
            ConfiguredStrategy::LinearTrend(s) => ConfiguredModel::LinearTrend(s.train(observations)?),
            ConfiguredStrategy::DriverRegression(s) => {
                ConfiguredModel::DriverRegression(s.train(observations)?)
            }
        })
    }

    fn train_adjusted(
        &self,
        observations: &Observations,
        adjusted: &Observations,
    ) -> Result<ConfiguredModel> {
        Ok(match self {
            ConfiguredStrategy::LinearTrend(s) => {
                ConfiguredModel::LinearTrend(s.train_adjusted(observations, adjusted)?)
            }
            ConfiguredStrategy::DriverRegression(s) => {
                ConfiguredModel::DriverRegression(s.train_adjusted(observations, adjusted)?)
            }
        })
    }

    fn predict(&self, model: &ConfiguredModel, horizon: usize) -> Result<Vec<f64>> {
        match (self, model) {
            (ConfiguredStrategy::LinearTrend(s), ConfiguredModel::LinearTrend(m)) => {
                s.predict(m, horizon)
            }
            (ConfiguredStrategy::DriverRegression(s), ConfiguredModel::DriverRegression(m)) => {
                s.predict(m, horizon)
            }
            _ => Err(ForecastError::invalid_parameter(
                "model",
                format!("not trained by the {} strategy", self.name()),
            )),
        }
    }
}
