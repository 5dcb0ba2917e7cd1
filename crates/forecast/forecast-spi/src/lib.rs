//! Forecast Service Provider Interface
//!
//! Defines the observation model the forecasting engine trains on, the
//! pluggable forecasting strategy trait, forecast/scenario/metric types and
//! the engine error taxonomy.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ForecastingStrategy;
pub use error::{ForecastError, Result};
pub use model::{ForecastResult, ModelMetrics, Observation, Observations, ScenarioParams};
