//! Templated insights from descriptive statistics.

use analysis_spi::{
    AnalysisResult, Insight, InsightGenerator, Statistic, TrendDirection, UndefinedReason,
};

/// Inverted coefficient of variation, clamped to `[0, 1]`.
///
/// Undefined when the mean is zero or the standard deviation is itself
/// undefined. The mean enters by magnitude so negative-valued metrics are
/// scored by their dispersion, not their sign.
pub fn cv_confidence(std_dev: Statistic, mean: f64) -> Statistic {
    std_dev
        .and_then(|sigma| Statistic::ratio(sigma, mean.abs(), UndefinedReason::ZeroMean))
        .map(|cv| (1.0 - cv).clamp(0.0, 1.0))
}

/// Insight generator with one fixed template per trend direction.
#[derive(Debug, Clone, Default)]
pub struct TemplateInsightGenerator;

impl TemplateInsightGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn insight_for(&self, result: &AnalysisResult) -> Insight {
        let metric = &result.metric;
        let rate = result.change_rate.unwrap_or(0.0);

        let (description, recommendation) = match result.trend {
            TrendDirection::Up => (
                format!("{} has shown a significant increase of {:.1}% recently.", metric, rate),
                "Consider optimizing resources to maintain this positive trend.",
            ),
            TrendDirection::Down => (
                format!("{} has decreased by {:.1}% recently.", metric, rate.abs()),
                "Investigate potential causes and implement corrective measures.",
            ),
            TrendDirection::Stable => (
                format!("{} has remained stable with minimal fluctuations.", metric),
                "Monitor for any significant changes in the trend.",
            ),
        };

        Insight {
            title: format!("{} Analysis", metric),
            description,
            recommendation: Some(recommendation.to_string()),
            metric: metric.clone(),
            magnitude: result.change_rate.map(f64::abs),
            trend: result.trend,
            confidence: cv_confidence(result.std_dev, result.mean),
        }
    }
}

impl InsightGenerator for TemplateInsightGenerator {
    fn generate(&self, results: &[AnalysisResult]) -> Vec<Insight> {
        results.iter().map(|r| self.insight_for(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(trend: TrendDirection, change_rate: Statistic, mean: f64, std_dev: Statistic) -> AnalysisResult {
        AnalysisResult {
            metric: "revenue".to_string(),
            count: 10,
            mean,
            median: mean,
            std_dev,
            trend,
            change_rate,
        }
    }

    #[test]
    fn test_up_template() {
        let insight = TemplateInsightGenerator::new().insight_for(&result(
            TrendDirection::Up,
            Statistic::Defined(12.34),
            100.0,
            Statistic::Defined(10.0),
        ));
        assert_eq!(insight.title, "revenue Analysis");
        assert_eq!(
            insight.description,
            "revenue has shown a significant increase of 12.3% recently."
        );
        assert_eq!(
            insight.recommendation.as_deref(),
            Some("Consider optimizing resources to maintain this positive trend.")
        );
        assert_eq!(insight.magnitude, Statistic::Defined(12.34));
        assert!((insight.confidence.value().unwrap() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_down_template_uses_absolute_rate() {
        let insight = TemplateInsightGenerator::new().insight_for(&result(
            TrendDirection::Down,
            Statistic::Defined(-7.26),
            100.0,
            Statistic::Defined(1.0),
        ));
        assert_eq!(insight.description, "revenue has decreased by 7.3% recently.");
        assert_eq!(insight.magnitude, Statistic::Defined(7.26));
    }

    #[test]
    fn test_stable_template_with_undefined_rate() {
        let insight = TemplateInsightGenerator::new().insight_for(&result(
            TrendDirection::Stable,
            Statistic::Undefined(UndefinedReason::ZeroBaseline),
            0.0,
            Statistic::Defined(1.0),
        ));
        assert_eq!(
            insight.description,
            "revenue has remained stable with minimal fluctuations."
        );
        assert_eq!(
            insight.magnitude,
            Statistic::Undefined(UndefinedReason::ZeroBaseline)
        );
        assert_eq!(
            insight.confidence,
            Statistic::Undefined(UndefinedReason::ZeroMean)
        );
    }

    #[test]
    fn test_confidence_clamped() {
        // Dispersion larger than the mean would go negative.
        assert_eq!(cv_confidence(Statistic::Defined(50.0), 10.0), Statistic::Defined(0.0));
        assert_eq!(cv_confidence(Statistic::Defined(0.0), 10.0), Statistic::Defined(1.0));
        assert_eq!(cv_confidence(Statistic::Defined(1.0), -10.0), Statistic::Defined(0.9));
        assert!(!cv_confidence(Statistic::too_few(2, 1), 10.0).is_defined());
    }

    #[test]
    fn test_generate_preserves_order() {
        let mut first = result(TrendDirection::Up, Statistic::Defined(5.0), 1.0, Statistic::Defined(0.1));
        first.metric = "a".to_string();
        let mut second = first.clone();
        second.metric = "b".to_string();

        let insights = TemplateInsightGenerator::new().generate(&[first, second]);
        let metrics: Vec<&str> = insights.iter().map(|i| i.metric.as_str()).collect();
        assert_eq!(metrics, vec!["a", "b"]);
    }
}
