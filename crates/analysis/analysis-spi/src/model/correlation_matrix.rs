//! Pairwise correlation matrix.

use super::Statistic;
use serde::{Deserialize, Serialize};

/// Square matrix of correlations indexed by metric name on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    metrics: Vec<String>,
    cells: Vec<Vec<Statistic>>,
}

impl CorrelationMatrix {
    /// Build a matrix from its diagonal and strict upper triangle.
    ///
    /// `upper` lists the cells `(i, j)` with `i < j` in row-major order; each
    /// value is mirrored into `(j, i)`, so the result is symmetric by
    /// construction.
    ///
    /// # Panics
    ///
    /// Panics if `diagonal` or `upper` do not match the number of metrics.
    pub fn from_upper_triangle(
        metrics: Vec<String>,
        diagonal: Vec<Statistic>,
        upper: Vec<Statistic>,
    ) -> Self {
        let n = metrics.len();
        assert_eq!(diagonal.len(), n, "one diagonal cell per metric");
        assert_eq!(upper.len(), n * n.saturating_sub(1) / 2, "strict upper triangle");

        let mut cells = vec![vec![Statistic::Defined(0.0); n]; n];
        for (i, value) in diagonal.into_iter().enumerate() {
            cells[i][i] = value;
        }
        let mut upper = upper.into_iter();
        for i in 0..n {
            for j in (i + 1)..n {
                if let Some(value) = upper.next() {
                    cells[i][j] = value;
                    cells[j][i] = value;
                }
            }
        }

        Self { metrics, cells }
    }

    pub fn empty() -> Self {
        Self {
            metrics: Vec::new(),
            cells: Vec::new(),
        }
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Cell by position.
    pub fn cell(&self, i: usize, j: usize) -> Option<Statistic> {
        self.cells.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Cell by metric names.
    pub fn get(&self, x: &str, y: &str) -> Option<Statistic> {
        let i = self.metrics.iter().position(|m| m == x)?;
        let j = self.metrics.iter().position(|m| m == y)?;
        self.cell(i, j)
    }

    /// Rows of the matrix in metric order.
    pub fn rows(&self) -> &[Vec<Statistic>] {
        &self.cells
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.len()).all(|i| (0..i).all(|j| self.cells[i][j] == self.cells[j][i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UndefinedReason;

    #[test]
    fn test_mirrors_upper_triangle() {
        let matrix = CorrelationMatrix::from_upper_triangle(
            vec!["a".into(), "b".into(), "c".into()],
            vec![Statistic::Defined(1.0); 3],
            vec![
                Statistic::Defined(0.5),
                Statistic::Defined(-0.2),
                Statistic::Undefined(UndefinedReason::ZeroVariance),
            ],
        );

        assert!(matrix.is_symmetric());
        assert_eq!(matrix.get("a", "b"), Some(Statistic::Defined(0.5)));
        assert_eq!(matrix.get("b", "a"), Some(Statistic::Defined(0.5)));
        assert_eq!(matrix.get("c", "a"), Some(Statistic::Defined(-0.2)));
        assert_eq!(
            matrix.get("c", "b"),
            Some(Statistic::Undefined(UndefinedReason::ZeroVariance))
        );
        assert_eq!(matrix.get("a", "missing"), None);
    }

    #[test]
    fn test_empty() {
        let matrix = CorrelationMatrix::from_upper_triangle(vec![], vec![], vec![]);
        assert!(matrix.is_empty());
        assert!(matrix.is_symmetric());
        assert_eq!(matrix, CorrelationMatrix::empty());
    }
}
