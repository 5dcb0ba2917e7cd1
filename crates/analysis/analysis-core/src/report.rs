//! Full dataset report.

use crate::correlation::PearsonCorrelation;
use crate::descriptive::DescriptiveAnalyzer;
use crate::insight::TemplateInsightGenerator;
use crate::summary::{histogram, summarize_latest};
use analysis_api::AnalysisConfig;
use analysis_spi::{
    AnalysisReport, CorrelationComputer, InsightGenerator, MetricAnalyzer, MetricSummary, Result,
};
use data_spi::Dataset;
use tracing::info;

/// Run descriptive statistics, correlation, insights and per-metric
/// summaries over one dataset snapshot.
pub fn analyze_dataset(dataset: &Dataset, config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;
    let excluded = &config.excluded_keys;

    let results = DescriptiveAnalyzer::from_config(config).analyze(dataset, excluded);
    let insights = TemplateInsightGenerator::new().generate(&results);
    let correlations = PearsonCorrelation::new().correlate(dataset, excluded);

    let summaries = results
        .iter()
        .map(|result| {
            let values = dataset.series(&result.metric);
            MetricSummary {
                metric: result.metric.clone(),
                latest: summarize_latest(&values).ok(),
                distribution: histogram(&values, config.histogram_buckets),
            }
        })
        .collect();

    info!(
        rows = dataset.len(),
        metrics = results.len(),
        "analysis report ready"
    );

    Ok(AnalysisReport {
        results,
        insights,
        correlations,
        summaries,
    })
}
