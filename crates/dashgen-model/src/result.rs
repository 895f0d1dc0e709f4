use serde::{Deserialize, Serialize};

use crate::summary::{ColumnKind, ColumnReport, ColumnSummary};

/// A retained pairwise correlation between two numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEdge {
    pub column_a: String,
    pub column_b: String,
    /// Pearson coefficient in `[-1, 1]`.
    pub coefficient: f64,
}

impl CorrelationEdge {
    pub fn strength(&self) -> f64 {
        self.coefficient.abs()
    }
}

/// Result of one full analysis pass over a parsed file.
///
/// Immutable once built; a new upload produces a new value rather than
/// updating this one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub row_count: usize,
    pub column_count: usize,
    pub headers: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    /// Per-column summaries and quality metrics in header order.
    pub columns: Vec<ColumnReport>,
    /// Correlations with |r| > 0.5, strongest first.
    pub correlations: Vec<CorrelationEdge>,
}

impl AnalysisResult {
    pub fn numeric_count(&self) -> usize {
        self.numeric_columns.len()
    }

    /// Report for the first column with the given name.
    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|report| report.name == name)
    }

    pub fn summary(&self, name: &str) -> Option<&ColumnSummary> {
        self.column(name).map(|report| &report.summary)
    }

    /// Missing-value count per column, header order.
    pub fn missing_values(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.columns
            .iter()
            .map(|report| (report.name.as_str(), report.quality.missing_count))
    }

    /// Outlier count per numeric column, header order.
    pub fn outliers(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.columns.iter().filter_map(|report| {
            report
                .quality
                .outlier_count
                .map(|count| (report.name.as_str(), count))
        })
    }

    pub fn columns_of_kind(&self, kind: ColumnKind) -> impl Iterator<Item = &ColumnReport> + '_ {
        self.columns
            .iter()
            .filter(move |report| report.kind() == kind)
    }
}
