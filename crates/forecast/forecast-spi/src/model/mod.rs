//! Data models for forecasting.

mod forecast_result;
mod model_metrics;
mod observations;
mod scenario_params;

pub use forecast_result::ForecastResult;
pub use model_metrics::ModelMetrics;
pub use observations::{Observation, Observations};
pub use scenario_params::ScenarioParams;
