//! Descriptive statistics per metric.
//!
//! Mean, median, sample standard deviation and a recent-versus-baseline
//! change rate for each numeric column of a dataset.

use analysis_api::AnalysisConfig;
use analysis_spi::{AnalysisResult, MetricAnalyzer, Statistic, TrendDirection, UndefinedReason};
use data_spi::Dataset;
use tracing::debug;

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance with the n - 1 denominator.
pub fn sample_variance(values: &[f64]) -> Statistic {
    let n = values.len();
    if n < 2 {
        return Statistic::too_few(2, n);
    }
    let mu = values.iter().sum::<f64>() / n as f64;
    let sum_sq = values.iter().map(|x| (x - mu).powi(2)).sum::<f64>();
    Statistic::Defined(sum_sq / (n - 1) as f64)
}

/// Sample standard deviation; undefined below two values.
pub fn sample_std_dev(values: &[f64]) -> Statistic {
    sample_variance(values).map(f64::sqrt)
}

/// Element at index `n / 2` of the ascending-sorted values.
///
/// For an even count this is the upper of the two middle elements.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(sorted[sorted.len() / 2])
}

/// Percent change of the recent window mean over the baseline window mean.
///
/// Both windows hold `min(window, n)` values: the last ones and the first
/// ones respectively, so they overlap on short series.
pub fn change_rate(values: &[f64], window: usize) -> Statistic {
    let n = values.len();
    let w = window.min(n);
    if w == 0 {
        return Statistic::too_few(1, 0);
    }

    let recent = values[n - w..].iter().sum::<f64>() / w as f64;
    let baseline = values[..w].iter().sum::<f64>() / w as f64;

    Statistic::ratio(recent - baseline, baseline, UndefinedReason::ZeroBaseline).map(|r| r * 100.0)
}

/// Windowed descriptive analyzer.
#[derive(Debug, Clone)]
pub struct DescriptiveAnalyzer {
    window: usize,
    change_threshold: f64,
}

impl DescriptiveAnalyzer {
    pub fn new(window: usize, change_threshold: f64) -> Self {
        Self {
            window,
            change_threshold,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.window, config.change_threshold)
    }

    /// Statistics for one already-extracted metric series.
    pub fn analyze_series(&self, metric: &str, values: &[f64]) -> Option<AnalysisResult> {
        let mean = mean(values)?;
        let median = median(values)?;
        let change_rate = change_rate(values, self.window);
        let trend = change_rate
            .value()
            .map(|rate| TrendDirection::classify(rate, self.change_threshold))
            .unwrap_or(TrendDirection::Stable);

        Some(AnalysisResult {
            metric: metric.to_string(),
            count: values.len(),
            mean,
            median,
            std_dev: sample_std_dev(values),
            trend,
            change_rate,
        })
    }
}

impl Default for DescriptiveAnalyzer {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl MetricAnalyzer for DescriptiveAnalyzer {
    fn analyze(&self, dataset: &Dataset, excluded: &[String]) -> Vec<AnalysisResult> {
        let results: Vec<AnalysisResult> = dataset
            .numeric_columns(excluded)
            .into_iter()
            .filter_map(|metric| {
                let values = dataset.series(&metric);
                self.analyze_series(&metric, &values)
            })
            .collect();

        debug!(
            rows = dataset.len(),
            metrics = results.len(),
            "computed descriptive statistics"
        );
        results
    }
}
