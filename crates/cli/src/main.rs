//! # trendcast-cli
//!
//! Command-line interface for dataset analysis and forecasting.

use analysis_facade::{analyze_dataset, AnalysisConfig};
use clap::{Parser, Subcommand};
use data_spi::Dataset;
use forecast_facade::{
    EngineConfig, ForecastResult, ForecastingEngine, ModelMetrics, Observations, ScenarioParams,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "trendcast")]
#[command(about = "Time series analytics and what-if forecasting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Descriptive statistics, correlations and insights for every metric
    Analyze {
        /// Input file: JSON array of row objects
        #[arg(short, long)]
        input: PathBuf,

        /// Time key excluded from numeric analysis
        #[arg(short, long, default_value = "date")]
        time_key: String,

        /// Analysis configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only analyze the most recent N rows
        #[arg(long)]
        last: Option<usize>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forecast a target metric, optionally under a what-if scenario
    Forecast {
        /// Input file: JSON array of row objects
        #[arg(short, long)]
        input: PathBuf,

        /// Time key excluded from the feature columns
        #[arg(long, default_value = "date")]
        time_key: String,

        /// Metric to forecast
        #[arg(short, long)]
        target: String,

        /// Number of periods to forecast
        #[arg(long, default_value = "12")]
        horizon: usize,

        /// Engine configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Marketing budget adjustment in percent
        #[arg(long, allow_hyphen_values = true)]
        budget: Option<f64>,

        /// Pricing adjustment in percent
        #[arg(long, allow_hyphen_values = true)]
        pricing: Option<f64>,

        /// Seasonality adjustment in percent
        #[arg(long, allow_hyphen_values = true)]
        seasonality: Option<f64>,

        /// Competitor activity adjustment in percent
        #[arg(long, allow_hyphen_values = true)]
        competitor: Option<f64>,

        /// Only use the most recent N rows
        #[arg(long)]
        last: Option<usize>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ForecastReport {
    target: String,
    forecast: ForecastResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario: Option<ScenarioReport>,
    metrics: ModelMetrics,
}

#[derive(Serialize)]
struct ScenarioReport {
    params: ScenarioParams,
    forecast: ForecastResult,
}

/// Read a JSON document into `T`.
fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> CliResult<T> {
    let file = File::open(path).map_err(|e| format!("Failed to open {} {:?}: {}", what, path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse {} {:?}: {}", what, path, e))
}

/// Load the dataset, keeping only the last `last` rows when given.
fn load_dataset(path: &Path, last: Option<usize>) -> CliResult<Dataset> {
    let dataset: Dataset = read_json(path, "input")?;
    if dataset.is_empty() {
        return Err(format!("No rows found in {:?}", path));
    }
    let dataset = match last {
        Some(n) => dataset.tail(n),
        None => dataset,
    };
    info!(rows = dataset.len(), columns = dataset.columns().len(), "dataset loaded");
    Ok(dataset)
}

/// Write JSON results to file or stdout
fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>) -> CliResult<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode JSON: {}", e))?;

    match output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| format!("Failed to write output: {}", e))?;
            info!(path = ?path, "results written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Run analyze command
fn run_analyze(
    input: PathBuf,
    time_key: String,
    config: Option<PathBuf>,
    last: Option<usize>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let dataset = load_dataset(&input, last)?;
    let mut config = match config {
        Some(path) => read_json::<AnalysisConfig>(&path, "analysis config")?,
        None => AnalysisConfig::default(),
    };
    if !config.excluded_keys.contains(&time_key) {
        config = config.exclude(time_key);
    }

    let report = analyze_dataset(&dataset, &config).map_err(|e| e.to_string())?;
    write_json(&report, output.as_ref())
}

/// Run forecast command
#[allow(clippy::too_many_arguments)]
async fn run_forecast(
    input: PathBuf,
    time_key: String,
    target: String,
    horizon: usize,
    config: Option<PathBuf>,
    params: Option<ScenarioParams>,
    last: Option<usize>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let dataset = load_dataset(&input, last)?;
    let config = match config {
        Some(path) => read_json::<EngineConfig>(&path, "engine config")?,
        None => EngineConfig::default(),
    };

    let observations =
        Observations::from_dataset(&dataset, &target, &[time_key]).map_err(|e| e.to_string())?;
    let engine = ForecastingEngine::from_config(config).map_err(|e| e.to_string())?;
    engine
        .initialize(observations)
        .await
        .map_err(|e| e.to_string())?;

    let forecast = engine.forecast(horizon).await.map_err(|e| e.to_string())?;
    let scenario = match params {
        Some(params) => {
            let forecast = engine
                .simulate_scenario_with_horizon(&params, horizon)
                .await
                .map_err(|e| e.to_string())?;
            Some(ScenarioReport { params, forecast })
        }
        None => None,
    };

    let report = ForecastReport {
        target,
        forecast,
        scenario,
        metrics: engine.model_metrics().await,
    };
    write_json(&report, output.as_ref())
}

/// Scenario from the adjustment flags; `None` when no flag is set.
fn scenario_params(
    budget: Option<f64>,
    pricing: Option<f64>,
    seasonality: Option<f64>,
    competitor: Option<f64>,
) -> Option<ScenarioParams> {
    if budget.is_none() && pricing.is_none() && seasonality.is_none() && competitor.is_none() {
        return None;
    }
    Some(
        ScenarioParams::new(
            budget.unwrap_or(0.0),
            pricing.unwrap_or(0.0),
            seasonality.unwrap_or(0.0),
        )
        .with_competitor_activity(competitor.unwrap_or(0.0)),
    )
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "trendcast_cli=info,analysis_core=info,forecast_core=info".into()
            }),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            time_key,
            config,
            last,
            output,
        } => run_analyze(input, time_key, config, last, output),

        Commands::Forecast {
            input,
            time_key,
            target,
            horizon,
            config,
            budget,
            pricing,
            seasonality,
            competitor,
            last,
            output,
        } => {
            let params = scenario_params(budget, pricing, seasonality, competitor);
            run_forecast(input, time_key, target, horizon, config, params, last, output).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
