//! Forecast Consumer API
//!
//! Configuration for the forecasting engine.
//!
//! This crate provides:
//! - Strategy selection and tuning
//! - Training policy and time limits
//! - Scenario column bindings
//! - Re-exports from SPI for convenience

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use analysis_api::{AnomalyConfig, TrendConfig};

// Re-export traits and types from SPI
pub use forecast_spi::{
    ForecastError, ForecastResult, ForecastingStrategy, ModelMetrics, Observation, Observations,
    Result, ScenarioParams,
};

// ============================================================================
// Strategy Configuration
// ============================================================================

/// Model family used by a configured strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Least squares of the target on the time index.
    LinearTrend,
    /// Ridge regression on time and driver columns.
    #[default]
    DriverRegression,
}

/// Strategy selection and tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub kind: StrategyKind,
    /// Ridge penalty relative to the number of training rows.
    pub ridge_penalty: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            kind: StrategyKind::DriverRegression,
            ridge_penalty: 1e-3,
        }
    }
}

impl StrategyConfig {
    pub fn new(kind: StrategyKind, ridge_penalty: f64) -> Self {
        Self {
            kind,
            ridge_penalty,
        }
    }

    /// Lighter configuration for ephemeral scenario models.
    pub fn scenario() -> Self {
        Self {
            ridge_penalty: 1e-1,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.ridge_penalty.is_finite() || self.ridge_penalty < 0.0 {
            return Err(ForecastError::invalid_parameter(
                "ridge_penalty",
                "must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// What happens when training is requested while another is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RetrainPolicy {
    /// Fail immediately with `RetrainInProgress`.
    #[default]
    Reject,
    /// Wait for the running operation, bounded by the training timeout.
    Queue,
}

/// Feature columns adjusted by each scenario parameter.
///
/// Unset bindings fall back to feature positions 0, 1 and 2 for budget,
/// pricing and seasonality. Competitor activity applies only when bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScenarioBindings {
    pub marketing_budget: Option<String>,
    pub pricing: Option<String>,
    pub seasonality: Option<String>,
    pub competitor_activity: Option<String>,
}

impl ScenarioBindings {
    pub fn with_marketing_budget(mut self, column: impl Into<String>) -> Self {
        self.marketing_budget = Some(column.into());
        self
    }

    pub fn with_pricing(mut self, column: impl Into<String>) -> Self {
        self.pricing = Some(column.into());
        self
    }

    pub fn with_seasonality(mut self, column: impl Into<String>) -> Self {
        self.seasonality = Some(column.into());
        self
    }

    pub fn with_competitor_activity(mut self, column: impl Into<String>) -> Self {
        self.competitor_activity = Some(column.into());
        self
    }
}

/// Forecasting engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Strategy for the persisted model.
    pub primary: StrategyConfig,
    /// Strategy for ephemeral scenario models.
    pub scenario: StrategyConfig,
    /// Share of the most recent rows held out for accuracy (default: 0.2).
    pub holdout_ratio: f64,
    pub train_timeout_ms: u64,
    pub forecast_timeout_ms: u64,
    pub retrain_policy: RetrainPolicy,
    /// Horizon used by `simulate_scenario` (default: 12).
    pub scenario_horizon: usize,
    pub bindings: ScenarioBindings,
    pub anomaly: AnomalyConfig,
    pub trend: TrendConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            primary: StrategyConfig::default(),
            scenario: StrategyConfig::scenario(),
            holdout_ratio: 0.2,
            train_timeout_ms: 30_000,
            forecast_timeout_ms: 5_000,
            retrain_policy: RetrainPolicy::Reject,
            scenario_horizon: 12,
            bindings: ScenarioBindings::default(),
            anomaly: AnomalyConfig::default(),
            trend: TrendConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_strategy(mut self, kind: StrategyKind) -> Self {
        self.primary.kind = kind;
        self.scenario.kind = kind;
        self
    }

    pub fn with_retrain_policy(mut self, policy: RetrainPolicy) -> Self {
        self.retrain_policy = policy;
        self
    }

    pub fn with_bindings(mut self, bindings: ScenarioBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_timeouts(mut self, train: Duration, forecast: Duration) -> Self {
        self.train_timeout_ms = duration_ms(train);
        self.forecast_timeout_ms = duration_ms(forecast);
        self
    }

    pub fn train_timeout(&self) -> Duration {
        Duration::from_millis(self.train_timeout_ms)
    }

    pub fn forecast_timeout(&self) -> Duration {
        Duration::from_millis(self.forecast_timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        self.primary.validate()?;
        self.scenario.validate()?;

        if !(0.0..1.0).contains(&self.holdout_ratio) {
            return Err(ForecastError::invalid_parameter(
                "holdout_ratio",
                "must be in [0, 1)",
            ));
        }
        if self.train_timeout_ms == 0 || self.forecast_timeout_ms == 0 {
            return Err(ForecastError::invalid_parameter(
                "timeout",
                "must be at least 1 ms",
            ));
        }
        if self.scenario_horizon == 0 {
            return Err(ForecastError::InvalidHorizon(0));
        }
        self.anomaly.validate()?;
        self.trend.validate()?;
        Ok(())
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{EngineConfig, RetrainPolicy, ScenarioBindings, StrategyConfig, StrategyKind};
    pub use forecast_spi::{
        ForecastError, ForecastResult, ForecastingStrategy, ModelMetrics, Observation,
        Observations, Result, ScenarioParams,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.primary.kind, StrategyKind::DriverRegression);
        assert_eq!(config.scenario.ridge_penalty, 1e-1);
        assert_eq!(config.holdout_ratio, 0.2);
        assert_eq!(config.retrain_policy, RetrainPolicy::Reject);
        assert_eq!(config.scenario_horizon, 12);
        assert_eq!(config.train_timeout(), Duration::from_secs(30));
        assert!(config.bindings.competitor_activity.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = EngineConfig::default();
        config.holdout_ratio = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ForecastError::InvalidParameter { .. })
        ));

        let mut config = EngineConfig::default();
        config.scenario_horizon = 0;
        assert!(matches!(config.validate(), Err(ForecastError::InvalidHorizon(0))));

        let mut config = EngineConfig::default();
        config.anomaly.sigma_multiplier = -1.0;
        assert!(matches!(config.validate(), Err(ForecastError::Analysis(_))));
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_strategy(StrategyKind::LinearTrend)
            .with_retrain_policy(RetrainPolicy::Queue)
            .with_timeouts(Duration::from_millis(100), Duration::from_millis(50))
            .with_bindings(ScenarioBindings::default().with_pricing("price"));

        assert_eq!(config.scenario.kind, StrategyKind::LinearTrend);
        assert_eq!(config.train_timeout_ms, 100);
        assert_eq!(config.forecast_timeout_ms, 50);
        assert_eq!(config.bindings.pricing.as_deref(), Some("price"));
    }

    #[test]
    fn test_partial_json() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"primary": {"kind": "linear_trend"}, "retrain_policy": "queue",
                "bindings": {"marketing_budget": "ad_spend"}}"#,
        )
        .unwrap();

        assert_eq!(config.primary.kind, StrategyKind::LinearTrend);
        assert_eq!(config.primary.ridge_penalty, 1e-3);
        assert_eq!(config.retrain_policy, RetrainPolicy::Queue);
        assert_eq!(config.bindings.marketing_budget.as_deref(), Some("ad_spend"));
        assert_eq!(config.scenario_horizon, 12);
    }
}
