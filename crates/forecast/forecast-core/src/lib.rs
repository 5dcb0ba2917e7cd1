//! Forecast Core
//!
//! Forecasting strategies, the forecast evaluation pipeline, scenario
//! adjustment and the asynchronous forecasting engine.

pub mod engine;
pub mod linalg;
pub mod pipeline;
pub mod scenario;
pub mod strategy;

// Re-export SPI traits for implementations
pub use forecast_spi::{ForecastError, ForecastingStrategy, Result};

// Re-export main types
pub use engine::{EngineState, ForecastingEngine};
pub use linalg::Line;
pub use pipeline::{evaluate_forecast, forecast_confidence, holdout_accuracy};
pub use scenario::apply_scenario;
pub use strategy::{
    ConfiguredModel, ConfiguredStrategy, DriverRegressionModel, DriverRegressionStrategy,
    LinearTrendModel, LinearTrendStrategy,
};
