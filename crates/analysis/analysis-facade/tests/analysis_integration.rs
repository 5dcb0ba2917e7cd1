//! Integration tests for the analysis stack

use analysis_facade::{
    AnomalyConfig, CorrelationComputer, Dataset, DescriptiveAnalyzer, InsightGenerator,
    MetricAnalyzer, PearsonCorrelation, Row, SequenceAnalyzer, SequenceStats, Statistic,
    TemplateInsightGenerator, TrendConfig, TrendDirection, UndefinedReason,
};

fn sales() -> Dataset {
    vec![
        Row::new().with("date", "2024-01-01").with("sales", 100.0).with("visits", 1000.0),
        Row::new().with("date", "2024-02-01").with("sales", 110.0).with("visits", 1080.0),
        Row::new().with("date", "2024-03-01").with("sales", 125.0).with("visits", 1210.0),
        Row::new().with("date", "2024-04-01").with("sales", 118.0).with("visits", 1150.0),
        Row::new().with("date", "2024-05-01").with("sales", 140.0).with("visits", 1390.0),
    ]
    .into()
}

fn excluded() -> Vec<String> {
    vec!["date".to_string()]
}

// ============================================================================
// Descriptive statistics
// ============================================================================

#[test]
fn test_descriptive_results_per_metric() {
    let results = DescriptiveAnalyzer::new(2, 1.0).analyze(&sales(), &excluded());

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].metric, "sales");
    assert_eq!(results[0].count, 5);
    assert!((results[0].mean - 118.6).abs() < 1e-9);
    assert_eq!(results[0].median, 118.0);

    // recent (118, 140) vs baseline (100, 110): +22.9%
    let rate = results[0].change_rate.value().unwrap();
    assert!((rate - 22.857_142_857).abs() < 1e-6);
    assert_eq!(results[0].trend, TrendDirection::Up);
}

#[test]
fn test_text_numbers_count_as_numeric() {
    let dataset: Dataset = vec![
        Row::new().with("units", "10"),
        Row::new().with("units", "n/a"),
        Row::new().with("units", 20.0),
    ]
    .into();

    let results = DescriptiveAnalyzer::default().analyze(&dataset, &[]);
    assert_eq!(results[0].count, 2);
    assert_eq!(results[0].mean, 15.0);
}

#[test]
fn test_zero_baseline_is_undefined() {
    let dataset: Dataset = [0.0, 0.0, 5.0]
        .iter()
        .map(|&v| Row::new().with("signups", v))
        .collect();

    let results = DescriptiveAnalyzer::new(1, 1.0).analyze(&dataset, &[]);
    assert_eq!(
        results[0].change_rate,
        Statistic::Undefined(UndefinedReason::ZeroBaseline)
    );
    assert_eq!(results[0].trend, TrendDirection::Stable);
}

// ============================================================================
// Correlation
// ============================================================================

#[test]
fn test_correlation_is_symmetric_with_unit_diagonal() {
    let matrix = PearsonCorrelation::new().correlate(&sales(), &excluded());

    assert!(matrix.is_symmetric());
    for metric in matrix.metrics() {
        assert_eq!(matrix.get(metric, metric), Some(Statistic::Defined(1.0)));
    }
    let r = matrix.get("sales", "visits").unwrap().value().unwrap();
    assert!(r > 0.99 && r <= 1.0);
}

#[test]
fn test_correlation_excludes_time_key() {
    let matrix = PearsonCorrelation::new().correlate(&sales(), &excluded());
    assert!(matrix.get("date", "sales").is_none());
}

// ============================================================================
// Insights
// ============================================================================

#[test]
fn test_one_insight_per_result() {
    let results = DescriptiveAnalyzer::new(2, 1.0).analyze(&sales(), &excluded());
    let insights = TemplateInsightGenerator::new().generate(&results);

    assert_eq!(insights.len(), results.len());
    assert_eq!(insights[0].title, "sales Analysis");
    assert!(insights[0].description.starts_with("sales has shown a significant increase of 22.9%"));
    assert!(insights.iter().all(|i| i.recommendation.is_some()));
}

// ============================================================================
// Sequence analysis
// ============================================================================

#[test]
fn test_sequence_spike_and_trend() {
    let stats = SequenceStats::new(AnomalyConfig::default(), TrendConfig::default());

    let mut spiky = vec![10.0; 9];
    spiky.push(100.0);
    assert_eq!(stats.detect_anomalies(&spiky), vec![9]);

    let trend = stats.analyze_trend(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(trend.direction, TrendDirection::Up);
    assert_eq!(trend.strength, 1.0);
}

#[test]
fn test_results_serialize_with_explicit_undefined() {
    let dataset: Dataset = vec![Row::new().with("x", 1.0)].into();
    let results = DescriptiveAnalyzer::default().analyze(&dataset, &[]);

    let json = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(json["std_dev"]["status"], "undefined");
    assert_eq!(json["trend"], "stable");
}
