//! Forecast Facade
//!
//! High-level API for forecasting. Re-exports all public types from the
//! forecast stack for convenient usage.

// Re-export everything from API (which includes SPI types)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{engine, linalg, pipeline, scenario, strategy};

pub use forecast_core::{
    apply_scenario, evaluate_forecast, forecast_confidence, holdout_accuracy, ConfiguredModel,
    ConfiguredStrategy, DriverRegressionModel, DriverRegressionStrategy, EngineState,
    ForecastingEngine, Line, LinearTrendModel, LinearTrendStrategy,
};
