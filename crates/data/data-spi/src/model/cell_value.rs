//! Loosely typed cell values.

use serde::{Deserialize, Serialize};

/// A single cell of a tabular dataset.
///
/// Collaborators parse files into these before handing rows over, so a
/// numeric column may still arrive as text (`"12.5"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Missing,
}

impl CellValue {
    /// Numeric view of the cell.
    ///
    /// Finite numbers and text that parses to a finite number qualify;
    /// everything else is `None` and is excluded from metric sequences.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(x) if x.is_finite() => Some(*x),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|x| x.is_finite()),
            _ => None,
        }
    }

    /// Whether the cell carries no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Missing)
    }
}
