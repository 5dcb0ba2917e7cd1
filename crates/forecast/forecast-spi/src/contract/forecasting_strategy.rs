//! Forecasting strategy trait

use crate::error::Result;
use crate::model::Observations;

/// A replaceable predictive model family.
///
/// `train` consumes a snapshot of observations and returns an immutable
/// model; `predict` extrapolates that model `horizon` steps past the last
/// observation. The engine owns the models and swaps them atomically, so
/// strategies keep no mutable state of their own.
pub trait ForecastingStrategy: Send + Sync {
    /// Trained model produced by this strategy.
    type Model: Send + Sync + 'static;

    /// Name of this strategy
    fn name(&self) -> &str;

    /// Fit a model to the observations.
    ///
    /// Fails with `DataInsufficient` when no observation carries a target.
    fn train(&self, observations: &Observations) -> Result<Self::Model>;

    /// Fit a what-if model: the target relationship comes from
    /// `observations`, while the feature paths follow `adjusted`, a copy of
    /// the same history with perturbed feature columns.
    ///
    /// The default trains on `adjusted` alone. Strategies that absorb a
    /// rescaled column into their coefficients must override it, or the
    /// perturbation never reaches the forecast.
    fn train_adjusted(
        &self,
        _observations: &Observations,
        adjusted: &Observations,
    ) -> Result<Self::Model> {
        self.train(adjusted)
    }

    /// Predict the next `horizon` target values.
    fn predict(&self, model: &Self::Model, horizon: usize) -> Result<Vec<f64>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use crate::model::Observation;

    /// Mock implementation: repeats the last target
    struct NaiveStrategy;

    impl ForecastingStrategy for NaiveStrategy {
        type Model = f64;

        fn name(&self) -> &str {
            "naive"
        }

        fn train(&self, observations: &Observations) -> Result<f64> {
            observations
                .targets()
                .last()
                .copied()
                .ok_or(ForecastError::DataInsufficient {
                    required: 1,
                    actual: 0,
                })
        }

        fn predict(&self, model: &f64, horizon: usize) -> Result<Vec<f64>> {
            Ok(vec![*model; horizon])
        }
    }

    #[test]
    fn test_mock_strategy() {
        let mut observations = Observations::new(vec![], "y");
        observations.push(Observation::new(vec![], Some(4.0))).unwrap();
        observations.push(Observation::new(vec![], Some(7.0))).unwrap();

        let strategy = NaiveStrategy;
        let model = strategy.train(&observations).unwrap();
        assert_eq!(strategy.predict(&model, 3).unwrap(), vec![7.0; 3]);
        assert_eq!(strategy.name(), "naive");
    }

    #[test]
    fn test_default_train_adjusted_uses_adjusted_history() {
        let mut observations = Observations::new(vec![], "y");
        observations.push(Observation::new(vec![], Some(4.0))).unwrap();
        let mut adjusted = observations.clone();
        adjusted.push(Observation::new(vec![], Some(9.0))).unwrap();

        let model = NaiveStrategy.train_adjusted(&observations, &adjusted).unwrap();
        assert_eq!(model, 9.0);
    }

    #[test]
    fn test_strategy_is_object_safe_for_concrete_model() {
        let strategy: Box<dyn ForecastingStrategy<Model = f64>> = Box::new(NaiveStrategy);
        let empty = Observations::new(vec![], "y");
        assert!(matches!(
            strategy.train(&empty),
            Err(ForecastError::DataInsufficient { .. })
        ));
    }
}
