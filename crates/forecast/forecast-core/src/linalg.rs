//! Small dense least-squares helpers.

use forecast_spi::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// `intercept + slope * t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub intercept: f64,
    pub slope: f64,
}

impl Line {
    pub fn flat(level: f64) -> Self {
        Self {
            intercept: level,
            slope: 0.0,
        }
    }

    /// Value at time `t`.
    pub fn at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }

    /// Ordinary least squares through `(t, y)` points.
    ///
    /// `None` for no points. A single point, or points sharing one `t`,
    /// give a flat line at the mean.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let mean_t = points.iter().map(|p| p.0).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

        let (mut s_tt, mut s_ty) = (0.0, 0.0);
        for &(t, y) in points {
            s_tt += (t - mean_t) * (t - mean_t);
            s_ty += (t - mean_t) * (y - mean_y);
        }

        if s_tt < 1e-12 {
            return Some(Self::flat(mean_y));
        }
        let slope = s_ty / s_tt;
        Some(Self {
            intercept: mean_y - slope * mean_t,
            slope,
        })
    }
}

/// Solve `a * x = b` by Gaussian elimination with partial pivoting.
///
/// `a` is row-major and square. Fails with `Numerical` on a singular
/// system.
pub fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(ForecastError::Numerical(
            "system matrix is not square".to_string(),
        ));
    }

    let scale = a
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |m, v| m.max(v.abs()))
        .max(1.0);

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot_row][col].abs() < 1e-12 * scale {
            return Err(ForecastError::Numerical(
                "singular normal equations".to_string(),
            ));
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Ok(x)
}
