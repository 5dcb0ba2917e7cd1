//! Asynchronous forecasting engine
//!
//! One engine owns the history and trained model for one dataset. Training
//! runs on the blocking pool behind a per-engine gate; the trained state is
//! an immutable snapshot swapped in only after training succeeds, so
//! readers always see a complete model.

use crate::pipeline::{evaluate_forecast, holdout_accuracy};
use crate::scenario::apply_scenario;
use crate::strategy::ConfiguredStrategy;
use analysis_core::SequenceStats;
use chrono::{DateTime, Utc};
use forecast_api::{EngineConfig, RetrainPolicy};
use forecast_spi::{
    ForecastError, ForecastResult, ForecastingStrategy, ModelMetrics, Observations, Result,
    ScenarioParams,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, info, warn};

/// Lifecycle of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    Uninitialized,
    Ready,
    /// A trained model is being replaced by `initialize` or `update_model`.
    ///
    /// Scenario runs also hold the training gate but leave the engine
    /// `Ready`, since the primary model does not change.
    Retraining,
}

struct TrainedState<M> {
    observations: Arc<Observations>,
    model: M,
    trained_at: DateTime<Utc>,
    accuracy: Option<f64>,
}

/// Forecasting engine over a pluggable strategy.
pub struct ForecastingEngine<S: ForecastingStrategy> {
    primary: Arc<S>,
    scenario: Arc<S>,
    analyzer: Arc<SequenceStats>,
    config: EngineConfig,
    state: RwLock<Option<Arc<TrainedState<S::Model>>>>,
    training_gate: Mutex<()>,
    retraining: AtomicBool,
}

impl ForecastingEngine<ConfiguredStrategy> {
    /// Engine whose primary and scenario strategies come from configuration.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let primary = ConfiguredStrategy::from_config(&config.primary);
        let scenario = ConfiguredStrategy::from_config(&config.scenario);
        Self::new(primary, scenario, config)
    }
}

impl<S: ForecastingStrategy + Clone + 'static> ForecastingEngine<S> {
    /// Engine using one strategy for both the primary and scenario models.
    pub fn with_strategy(strategy: S, config: EngineConfig) -> Result<Self> {
        Self::new(strategy.clone(), strategy, config)
    }
}

impl<S: ForecastingStrategy + 'static> ForecastingEngine<S> {
    pub fn new(primary: S, scenario: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = SequenceStats::new(config.anomaly.clone(), config.trend.clone());
        Ok(Self {
            primary: Arc::new(primary),
            scenario: Arc::new(scenario),
            analyzer: Arc::new(analyzer),
            config,
            state: RwLock::new(None),
            training_gate: Mutex::new(()),
            retraining: AtomicBool::new(false),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub async fn state(&self) -> EngineState {
        if self.state.read().await.is_none() {
            EngineState::Uninitialized
        } else if self.retraining.load(Ordering::Acquire) {
            EngineState::Retraining
        } else {
            EngineState::Ready
        }
    }

    /// Store `observations` and train from scratch.
    ///
    /// Replaces any previous history. Fails with `DataInsufficient`, leaving
    /// the engine untouched, when no observation carries a target.
    pub async fn initialize(&self, observations: Observations) -> Result<()> {
        let actual = observations.target_count();
        if actual == 0 {
            return Err(ForecastError::DataInsufficient {
                required: 1,
                actual,
            });
        }

        let _gate = self.acquire_gate("initialize").await?;
        self.train_and_swap("initialize", observations).await
    }

    /// Append `observations` to the history and retrain.
    pub async fn update_model(&self, observations: Observations) -> Result<()> {
        let _gate = self.acquire_gate("update_model").await?;
        let current = self.snapshot().await?;

        let mut combined = (*current.observations).clone();
        combined.extend(observations)?;
        self.train_and_swap("update_model", combined).await
    }

    /// Forecast `horizon` periods with the current model.
    pub async fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon(horizon));
        }
        let current = self.snapshot().await?;
        let strategy = Arc::clone(&self.primary);
        let analyzer = Arc::clone(&self.analyzer);

        let result = run_bounded("forecast", self.config.forecast_timeout(), move || {
            let predictions = strategy.predict(&current.model, horizon)?;
            evaluate_forecast(predictions, analyzer.as_ref())
        })
        .await?;

        debug!(
            horizon,
            direction = %result.trend.direction,
            confidence = result.confidence,
            "forecast computed"
        );
        Ok(result)
    }

    /// Forecast under `params` using the configured scenario horizon.
    pub async fn simulate_scenario(&self, params: &ScenarioParams) -> Result<ForecastResult> {
        self.simulate_scenario_with_horizon(params, self.config.scenario_horizon)
            .await
    }

    /// Forecast under `params` with an ephemeral model.
    ///
    /// The history is copied and adjusted, and the scenario strategy fits
    /// the relationship on the stored history while projecting drivers
    /// from the adjusted copy. Neither the stored history nor the primary
    /// model changes.
    pub async fn simulate_scenario_with_horizon(
        &self,
        params: &ScenarioParams,
        horizon: usize,
    ) -> Result<ForecastResult> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon(horizon));
        }
        let current = self.snapshot().await?;
        let adjusted = apply_scenario(&current.observations, params, &self.config.bindings)?;

        let _gate = self.acquire_gate("simulate_scenario").await?;
        let strategy = Arc::clone(&self.scenario);
        let analyzer = Arc::clone(&self.analyzer);
        let history = Arc::clone(&current.observations);

        let result = run_bounded("scenario", self.config.train_timeout(), move || {
            let model = strategy.train_adjusted(&history, &adjusted)?;
            let predictions = strategy.predict(&model, horizon)?;
            evaluate_forecast(predictions, analyzer.as_ref())
        })
        .await?;

        debug!(
            horizon,
            marketing_budget = params.marketing_budget,
            pricing = params.pricing,
            seasonality = params.seasonality,
            competitor_activity = params.competitor_activity,
            "scenario simulated"
        );
        Ok(result)
    }

    /// Size, freshness and holdout accuracy of the current model.
    pub async fn model_metrics(&self) -> ModelMetrics {
        match self.state.read().await.as_ref() {
            None => ModelMetrics::uninitialized(),
            Some(state) => ModelMetrics {
                last_update: Some(state.trained_at),
                data_points: state.observations.len(),
                accuracy: state.accuracy,
            },
        }
    }

    async fn snapshot(&self) -> Result<Arc<TrainedState<S::Model>>> {
        self.state
            .read()
            .await
            .clone()
            .ok_or(ForecastError::NotInitialized)
    }

    async fn acquire_gate(&self, operation: &str) -> Result<MutexGuard<'_, ()>> {
        match self.config.retrain_policy {
            RetrainPolicy::Reject => self.training_gate.try_lock().map_err(|_| {
                warn!(operation, "rejected: training already in progress");
                ForecastError::RetrainInProgress
            }),
            RetrainPolicy::Queue => {
                let limit = self.config.train_timeout();
                tokio::time::timeout(limit, self.training_gate.lock())
                    .await
                    .map_err(|_| {
                        warn!(operation, "timed out waiting for the training gate");
                        timeout_error(operation, limit)
                    })
            }
        }
    }

    // Caller holds the training gate.
    async fn train_and_swap(&self, operation: &str, observations: Observations) -> Result<()> {
        let _retraining = RetrainingFlag::raise(&self.retraining);
        let observations = Arc::new(observations);
        let strategy = Arc::clone(&self.primary);
        let ratio = self.config.holdout_ratio;
        let history = Arc::clone(&observations);

        let (model, accuracy) = run_bounded("training", self.config.train_timeout(), move || {
            let model = strategy.train(&history)?;
            let accuracy = holdout_accuracy(strategy.as_ref(), &history, ratio);
            Ok((model, accuracy))
        })
        .await?;

        let data_points = observations.len();
        let trained = Arc::new(TrainedState {
            observations,
            model,
            trained_at: Utc::now(),
            accuracy,
        });
        *self.state.write().await = Some(trained);

        info!(
            operation,
            strategy = self.primary.name(),
            data_points,
            accuracy = ?accuracy,
            "model trained"
        );
        Ok(())
    }
}

/// Marks a primary retrain for [`ForecastingEngine::state`]; cleared on drop.
struct RetrainingFlag<'a>(&'a AtomicBool);

impl<'a> RetrainingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for RetrainingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Run `job` on the blocking pool, giving up after `limit`.
///
/// Blocking work cannot be cancelled: after a timeout the job keeps running
/// to completion and only its result is discarded. Callers release the
/// training gate when this returns, so a queued retrain may then run on the
/// CPU alongside the abandoned job. Engine state stays consistent because
/// the abandoned result is never swapped in, but the gate bounds in-flight
/// training only up to such timeouts.
async fn run_bounded<T, F>(operation: &str, limit: Duration, job: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    match tokio::time::timeout(limit, tokio::task::spawn_blocking(job)).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => {
            warn!(operation, error = %join_error, "worker failed");
            Err(ForecastError::TrainingAborted(join_error.to_string()))
        }
        Err(_) => {
            warn!(operation, limit_ms = limit.as_millis() as u64, "timed out");
            Err(timeout_error(operation, limit))
        }
    }
}

fn timeout_error(operation: &str, limit: Duration) -> ForecastError {
    ForecastError::Timeout {
        operation: operation.to_string(),
        limit_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::LinearTrendStrategy;
    use analysis_spi::TrendDirection;

    fn rising(n: usize) -> Observations {
        let rows: Vec<Vec<f64>> = (0..n).map(|i| vec![100.0 + 5.0 * i as f64]).collect();
        Observations::from_numeric_rows(&rows).unwrap()
    }

    fn engine() -> ForecastingEngine<LinearTrendStrategy> {
        ForecastingEngine::with_strategy(LinearTrendStrategy, EngineConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let engine = engine();
        assert_eq!(engine.state().await, EngineState::Uninitialized);
        assert!(matches!(
            engine.forecast(3).await,
            Err(ForecastError::NotInitialized)
        ));

        engine.initialize(rising(10)).await.unwrap();
        assert_eq!(engine.state().await, EngineState::Ready);

        let result = engine.forecast(3).await.unwrap();
        assert_eq!(result.predictions.len(), 3);
        assert!((result.predictions[0] - 150.0).abs() < 1e-9);
        assert_eq!(result.trend.direction, TrendDirection::Up);
    }

    #[tokio::test]
    async fn test_update_appends() {
        let engine = engine();
        engine.initialize(rising(10)).await.unwrap();
        let before = engine.model_metrics().await;

        engine.update_model(rising(2)).await.unwrap();
        let after = engine.model_metrics().await;
        assert_eq!(after.data_points, 12);
        assert!(after.last_update >= before.last_update);
    }

    #[tokio::test]
    async fn test_update_requires_initialize() {
        let engine = engine();
        assert!(matches!(
            engine.update_model(rising(2)).await,
            Err(ForecastError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_invalid_horizon() {
        let engine = engine();
        engine.initialize(rising(4)).await.unwrap();
        assert!(matches!(
            engine.forecast(0).await,
            Err(ForecastError::InvalidHorizon(0))
        ));
        assert!(matches!(
            engine
                .simulate_scenario_with_horizon(&ScenarioParams::default(), 0)
                .await,
            Err(ForecastError::InvalidHorizon(0))
        ));
    }

    #[tokio::test]
    async fn test_run_bounded_reports_panics() {
        let result: Result<()> = run_bounded("training", Duration::from_secs(5), || {
            panic!("boom");
        })
        .await;
        assert!(matches!(result, Err(ForecastError::TrainingAborted(_))));
    }

    #[tokio::test]
    async fn test_run_bounded_times_out() {
        let result: Result<()> = run_bounded("training", Duration::from_millis(10), || {
            std::thread::sleep(Duration::from_millis(200));
            Ok(())
        })
        .await;
        assert!(matches!(
            result,
            Err(ForecastError::Timeout { limit_ms: 10, .. })
        ));
    }
}
