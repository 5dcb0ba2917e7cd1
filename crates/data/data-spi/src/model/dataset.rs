//! Ordered collections of rows.

use super::Row;
use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};

/// A chronologically ordered table of rows.
///
/// Row order is the time order; every trend and forecast computation
/// depends on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All column names in first-seen order across rows.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for row in &self.rows {
            for column in row.columns() {
                if !columns.iter().any(|c| c == column) {
                    columns.push(column.to_string());
                }
            }
        }
        columns
    }

    /// Columns holding at least one numeric value, minus the excluded keys.
    pub fn numeric_columns<S: AsRef<str>>(&self, excluded: &[S]) -> Vec<String> {
        self.columns()
            .into_iter()
            .filter(|c| !excluded.iter().any(|e| e.as_ref() == c))
            .filter(|c| self.rows.iter().any(|row| row.number(c).is_some()))
            .collect()
    }

    /// Numeric values of one metric in row order; non-numeric cells are skipped.
    pub fn series(&self, column: &str) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.number(column)).collect()
    }

    /// Values of two metrics restricted to rows where both are numeric.
    pub fn aligned(&self, x: &str, y: &str) -> (Vec<f64>, Vec<f64>) {
        self.rows
            .iter()
            .filter_map(|row| Some((row.number(x)?, row.number(y)?)))
            .unzip()
    }

    /// Fail unless some row carries the column.
    pub fn require_column(&self, column: &str) -> Result<()> {
        if self.rows.iter().any(|row| row.get(column).is_some()) {
            Ok(())
        } else {
            Err(DataError::ColumnNotFound(column.to_string()))
        }
    }

    /// Fail unless the column exists and holds at least one number.
    pub fn require_numeric(&self, column: &str) -> Result<()> {
        self.require_column(column)?;
        if self.rows.iter().any(|row| row.number(column).is_some()) {
            Ok(())
        } else {
            Err(DataError::NonNumericColumn(column.to_string()))
        }
    }

    /// The most recent `n` rows.
    pub fn tail(&self, n: usize) -> Dataset {
        let start = self.rows.len().saturating_sub(n);
        Dataset::from_rows(self.rows[start..].to_vec())
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::from_rows(rows)
    }
}

impl FromIterator<Row> for Dataset {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
