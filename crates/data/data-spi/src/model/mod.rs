//! Data models for tabular datasets.

mod cell_value;
mod dataset;
mod row;

pub use cell_value::CellValue;
pub use dataset::Dataset;
pub use row::Row;
