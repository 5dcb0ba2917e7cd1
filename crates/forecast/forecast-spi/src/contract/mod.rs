//! Contract definitions for forecasting.

mod forecasting_strategy;

pub use forecasting_strategy::ForecastingStrategy;
