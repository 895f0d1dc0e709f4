//! Data model for the CSV dashboard generator.
//!
//! - [`RawTable`]: row-oriented parser output
//! - [`Table`] / [`Column`]: column-oriented view with the numeric parse applied once
//! - [`ColumnSummary`], [`QualityMetrics`], [`ColumnReport`]: per-column results
//! - [`AnalysisResult`], [`CorrelationEdge`]: the aggregate handed to presentation

pub mod numeric;
pub mod result;
pub mod summary;
pub mod table;

pub use numeric::{is_numeric_value, parse_leading_f64};
pub use result::{AnalysisResult, CorrelationEdge};
pub use summary::{
    CategoricalSummary, ColumnKind, ColumnReport, ColumnSummary, NumericSummary, QualityMetrics,
};
pub use table::{Column, RawTable, Table};
