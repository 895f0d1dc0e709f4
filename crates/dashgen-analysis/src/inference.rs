//! Column type inference.

use dashgen_model::{Column, ColumnKind, Table};

/// Share of numeric values a column must strictly exceed to be numeric.
pub const NUMERIC_THRESHOLD: f64 = 0.5;

/// Fraction of a column's values that parse as numbers.
///
/// Absent and empty values count toward the total as non-numeric. An empty
/// column has fraction `0.0`.
pub fn numeric_fraction(column: &Column) -> f64 {
    if column.is_empty() {
        return 0.0;
    }
    column.numeric_count() as f64 / column.len() as f64
}

/// Numeric iff strictly more than half of the values parse; ties are
/// categorical.
pub fn classify_column(column: &Column) -> ColumnKind {
    // 2n > N is the exact form of n / N > 0.5.
    if 2 * column.numeric_count() > column.len() {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// Column indices split by kind, each list in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub numeric: Vec<usize>,
    pub categorical: Vec<usize>,
}

impl Classification {
    pub fn kind_of(&self, index: usize) -> Option<ColumnKind> {
        if self.numeric.contains(&index) {
            Some(ColumnKind::Numeric)
        } else if self.categorical.contains(&index) {
            Some(ColumnKind::Categorical)
        } else {
            None
        }
    }
}

pub fn classify_table(table: &Table) -> Classification {
    let mut classification = Classification::default();
    for (idx, column) in table.columns().iter().enumerate() {
        let kind = classify_column(column);
        tracing::debug!(
            column = column.name(),
            ?kind,
            numeric_fraction = numeric_fraction(column),
            "classified column"
        );
        match kind {
            ColumnKind::Numeric => classification.numeric.push(idx),
            ColumnKind::Categorical => classification.categorical.push(idx),
        }
    }
    classification
}
