//! Dataset Service Provider Interface
//!
//! Defines the tabular dataset handed over by presentation collaborators:
//! ordered rows mapping column names to loosely typed cell values.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{DataError, Result};
pub use model::{CellValue, Dataset, Row};

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly() -> Dataset {
        Dataset::from_rows(vec![
            Row::new()
                .with("date", "2024-01")
                .with("revenue", 100.0)
                .with("region", "north"),
            Row::new()
                .with("date", "2024-02")
                .with("revenue", CellValue::Missing)
                .with("cost", 40.0),
            Row::new()
                .with("date", "2024-03")
                .with("revenue", "120.5")
                .with("cost", 42.0),
        ])
    }

    #[test]
    fn test_columns_in_first_seen_order() {
        let data = monthly();
        assert_eq!(data.columns(), vec!["date", "revenue", "region", "cost"]);
    }

    #[test]
    fn test_series_skips_non_numeric() {
        let data = monthly();
        assert_eq!(data.series("revenue"), vec![100.0, 120.5]);
        assert_eq!(data.series("cost"), vec![40.0, 42.0]);
        assert!(data.series("region").is_empty());
    }

    #[test]
    fn test_numeric_columns_respects_exclusions() {
        let data = monthly();
        assert_eq!(data.numeric_columns(&["date"]), vec!["revenue", "cost"]);
        assert_eq!(data.numeric_columns(&["date", "cost"]), vec!["revenue"]);
    }

    #[test]
    fn test_aligned_pairs_filter_per_row() {
        let data = monthly();
        let (revenue, cost) = data.aligned("revenue", "cost");
        assert_eq!(revenue, vec![120.5]);
        assert_eq!(cost, vec![42.0]);
    }

    #[test]
    fn test_require_column() {
        let data = monthly();
        assert!(data.require_column("cost").is_ok());
        let err = data.require_column("profit").unwrap_err();
        assert_eq!(err.to_string(), "Column not found: profit");
    }

    #[test]
    fn test_tail() {
        let data = monthly();
        let last_two = data.tail(2);
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two.series("cost"), vec![40.0, 42.0]);
        assert_eq!(data.tail(10).len(), 3);
    }
}
