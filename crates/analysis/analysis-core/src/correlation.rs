//! Pearson correlation across dataset metrics.

use analysis_spi::{CorrelationComputer, CorrelationMatrix, Statistic, UndefinedReason};
use data_spi::Dataset;
use rayon::prelude::*;
use tracing::debug;

/// Pearson correlation coefficient of two aligned series.
///
/// Equal to `(nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²))`, evaluated
/// on mean-centred sums so large offsets do not cancel catastrophically.
/// Only the first `min(x.len(), y.len())` positions are used.
pub fn pearson(x: &[f64], y: &[f64]) -> Statistic {
    let n = x.len().min(y.len());
    if n < 2 {
        return Statistic::too_few(2, n);
    }
    let (x, y) = (&x[..n], &y[..n]);

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut ss_x = 0.0;
    let mut ss_y = 0.0;
    let mut cross = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        ss_x += dx * dx;
        ss_y += dy * dy;
        cross += dx * dy;
    }

    if !has_variance(ss_x, x) || !has_variance(ss_y, y) {
        return Statistic::Undefined(UndefinedReason::ZeroVariance);
    }

    Statistic::Defined((cross / (ss_x * ss_y).sqrt()).clamp(-1.0, 1.0))
}

/// Diagonal entry: 1.0 whenever the series has variance.
fn self_correlation(values: &[f64]) -> Statistic {
    if values.len() < 2 {
        return Statistic::too_few(2, values.len());
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    if has_variance(ss, values) {
        Statistic::Defined(1.0)
    } else {
        Statistic::Undefined(UndefinedReason::ZeroVariance)
    }
}

// A constant series still leaves a centred sum of squares of rounding
// noise: the mean carries up to n ulps of error in the largest magnitude.
// Anything above n such squared deviations is real spread, however large
// the offset.
fn has_variance(centred_ss: f64, values: &[f64]) -> bool {
    let n = values.len() as f64;
    let largest = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let noise = n * f64::EPSILON * largest;
    centred_ss > 0.0 && centred_ss > n * noise * noise
}

/// Correlation engine computing every metric pair with per-pair row filtering.
#[derive(Debug, Clone, Default)]
pub struct PearsonCorrelation;

impl PearsonCorrelation {
    pub fn new() -> Self {
        Self
    }
}

impl CorrelationComputer for PearsonCorrelation {
    fn correlate(&self, dataset: &Dataset, excluded: &[String]) -> CorrelationMatrix {
        let metrics = dataset.numeric_columns(excluded);
        let n = metrics.len();

        let diagonal: Vec<Statistic> = metrics
            .par_iter()
            .map(|metric| self_correlation(&dataset.series(metric)))
            .collect();

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();

        let upper: Vec<Statistic> = pairs
            .par_iter()
            .map(|&(i, j)| {
                let (x, y) = dataset.aligned(&metrics[i], &metrics[j]);
                pearson(&x, &y)
            })
            .collect();

        debug!(metrics = n, pairs = pairs.len(), "computed correlation matrix");
        CorrelationMatrix::from_upper_triangle(metrics, diagonal, upper)
    }
}
