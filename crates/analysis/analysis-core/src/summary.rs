//! Latest-change and distribution summaries for a single metric.

use analysis_spi::{
    AnalysisError, HistogramBucket, LatestChange, Result, Statistic, TrendDirection,
    UndefinedReason,
};

/// Compare the last value with the one before it.
///
/// The percent change is relative to `|previous|`, so moving from -10 to -5
/// is reported as +50%. The trend follows the sign of the raw difference.
pub fn summarize_latest(values: &[f64]) -> Result<LatestChange> {
    let n = values.len();
    if n < 2 {
        return Err(AnalysisError::InsufficientData {
            required: 2,
            actual: n,
        });
    }

    let latest = values[n - 1];
    let previous = values[n - 2];
    let delta = latest - previous;

    Ok(LatestChange {
        latest,
        previous,
        change: Statistic::ratio(delta, previous.abs(), UndefinedReason::ZeroBaseline)
            .map(|r| r * 100.0),
        trend: TrendDirection::classify(delta, 0.0),
    })
}

/// Equal-width histogram between the minimum and maximum value.
///
/// The maximum lands in the last bucket. A series with no spread yields a
/// single bucket holding every value.
pub fn histogram(values: &[f64], buckets: usize) -> Vec<HistogramBucket> {
    if values.is_empty() || buckets == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= 0.0 {
        return vec![HistogramBucket {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = range / buckets as f64;
    let mut counts = vec![0usize; buckets];
    for &value in values {
        let index = (((value - min) / width) as usize).min(buckets - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBucket {
            lower: min + width * i as f64,
            upper: if i + 1 == buckets {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}
