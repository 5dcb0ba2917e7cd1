//! Multivariate historical observations

use crate::error::{ForecastError, Result};
use data_spi::Dataset;
use serde::{Deserialize, Serialize};

/// One time step: optional feature values and an optional target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub features: Vec<Option<f64>>,
    pub target: Option<f64>,
}

impl Observation {
    pub fn new(features: Vec<Option<f64>>, target: Option<f64>) -> Self {
        Self { features, target }
    }

    /// Fully observed row.
    pub fn complete(features: &[f64], target: f64) -> Self {
        Self {
            features: features.iter().copied().map(Some).collect(),
            target: Some(target),
        }
    }
}

/// Ordered observations sharing one column layout.
///
/// Row order is time order; the row index is the time index strategies
/// regress on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observations {
    feature_names: Vec<String>,
    target_name: String,
    rows: Vec<Observation>,
}

impl Observations {
    pub fn new(feature_names: Vec<String>, target_name: impl Into<String>) -> Self {
        Self {
            feature_names,
            target_name: target_name.into(),
            rows: Vec::new(),
        }
    }

    /// Build from raw numeric rows whose last column is the target.
    ///
    /// Features are named `feature_0`, `feature_1`, ... and the target
    /// `target`. Every row must have the same width.
    pub fn from_numeric_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(ForecastError::DataInsufficient {
                required: 1,
                actual: 0,
            });
        };
        if first.is_empty() {
            return Err(ForecastError::invalid_parameter(
                "rows",
                "each row needs at least a target column",
            ));
        }

        let width = first.len();
        let feature_names = (0..width - 1).map(|i| format!("feature_{}", i)).collect();
        let mut observations = Self::new(feature_names, "target");

        for row in rows {
            if row.len() != width {
                return Err(ForecastError::SchemaMismatch {
                    expected: observations.columns(),
                    actual: (0..row.len()).map(|i| format!("column_{}", i)).collect(),
                });
            }
            let (target, features) = row.split_last().ok_or_else(|| {
                ForecastError::invalid_parameter("rows", "empty row")
            })?;
            observations.rows.push(Observation::complete(features, *target));
        }

        Ok(observations)
    }

    /// Build from a dataset.
    ///
    /// Every numeric column other than the target and the excluded keys
    /// becomes a feature, in column order. Non-numeric cells become gaps.
    pub fn from_dataset<S: AsRef<str>>(
        dataset: &Dataset,
        target: &str,
        excluded: &[S],
    ) -> Result<Self> {
        dataset.require_numeric(target)?;

        let feature_names: Vec<String> = dataset
            .numeric_columns(excluded)
            .into_iter()
            .filter(|c| c != target)
            .collect();

        let rows = dataset
            .rows()
            .iter()
            .map(|row| Observation {
                features: feature_names.iter().map(|f| row.number(f)).collect(),
                target: row.number(target),
            })
            .collect();

        Ok(Self {
            feature_names,
            target_name: target.to_string(),
            rows,
        })
    }

    /// Append one observation with the same number of features.
    pub fn push(&mut self, observation: Observation) -> Result<()> {
        if observation.features.len() != self.feature_names.len() {
            return Err(ForecastError::SchemaMismatch {
                expected: self.feature_names.clone(),
                actual: (0..observation.features.len())
                    .map(|i| format!("feature_{}", i))
                    .collect(),
            });
        }
        self.rows.push(observation);
        Ok(())
    }

    /// Append all rows of `other`; its column layout must match exactly.
    pub fn extend(&mut self, other: Observations) -> Result<()> {
        if !self.same_schema(&other) {
            return Err(ForecastError::SchemaMismatch {
                expected: self.columns(),
                actual: other.columns(),
            });
        }
        self.rows.extend(other.rows);
        Ok(())
    }

    pub fn same_schema(&self, other: &Observations) -> bool {
        self.feature_names == other.feature_names && self.target_name == other.target_name
    }

    /// Feature names followed by the target name.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = self.feature_names.clone();
        columns.push(self.target_name.clone());
        columns
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.feature_names.iter().position(|f| f == name)
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows that carry a target value.
    pub fn target_count(&self) -> usize {
        self.rows.iter().filter(|r| r.target.is_some()).count()
    }

    /// Target values in time order, gaps skipped.
    pub fn targets(&self) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.target).collect()
    }

    /// Split into the first `at` rows and the rest.
    pub fn split_at(&self, at: usize) -> (Observations, Observations) {
        let at = at.min(self.rows.len());
        let head = Self {
            feature_names: self.feature_names.clone(),
            target_name: self.target_name.clone(),
            rows: self.rows[..at].to_vec(),
        };
        let tail = Self {
            rows: self.rows[at..].to_vec(),
            ..head.clone()
        };
        (head, tail)
    }

    /// Multiply every present value of one feature column.
    pub fn scale_feature(&mut self, index: usize, factor: f64) {
        for row in &mut self.rows {
            if let Some(Some(value)) = row.features.get_mut(index) {
                *value *= factor;
            }
        }
    }
}
