//! Parsed tables: the row-oriented parser output and the column-oriented view
//! used by the analysis stages.

use serde::{Deserialize, Serialize};

use crate::numeric::parse_leading_f64;

/// Row-oriented parser output.
///
/// Each row holds the fields present on its source line, positionally paired
/// with `headers`. A row may be shorter than the header list; the trailing
/// headers are absent for that row. Rows are never longer than the header
/// list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Value at `row` for the header at position `column`, `None` when absent.
    pub fn value(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|fields| fields.get(column))
            .map(String::as_str)
    }
}

/// A single column of a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Option<String>>,
    numbers: Vec<Option<f64>>,
}

impl Column {
    /// Builds a column and runs the numeric parse over every value once.
    pub fn new(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        let numbers = values
            .iter()
            .map(|value| value.as_deref().and_then(parse_leading_f64))
            .collect();
        Self {
            name: name.into(),
            values,
            numbers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw values; `None` marks a field missing from a short row.
    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    pub fn value(&self, row: usize) -> Option<&str> {
        self.values.get(row).and_then(Option::as_deref)
    }

    /// Numeric parse result for every row, aligned with [`Column::values`].
    pub fn numbers(&self) -> &[Option<f64>] {
        &self.numbers
    }

    /// Successfully parsed values in row order, non-numeric rows skipped.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.numbers.iter().flatten().copied().collect()
    }

    pub fn numeric_count(&self) -> usize {
        self.numbers.iter().filter(|value| value.is_some()).count()
    }
}

/// Column-oriented table with a fixed schema.
///
/// Built once from a [`RawTable`]; every header position gets its own
/// [`Column`], so duplicate header names stay independent columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    pub fn from_raw(raw: &RawTable) -> Self {
        let columns = raw
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let values = raw
                    .rows
                    .iter()
                    .map(|row| row.get(idx).cloned())
                    .collect();
                Column::new(header.clone(), values)
            })
            .collect();
        Self {
            columns,
            row_count: raw.row_count(),
        }
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.name.clone())
            .collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// First column with the given header name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Values of one row across all columns.
    pub fn row(&self, index: usize) -> Vec<Option<&str>> {
        self.columns
            .iter()
            .map(|column| column.value(index))
            .collect()
    }
}

impl From<RawTable> for Table {
    fn from(raw: RawTable) -> Self {
        Self::from_raw(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|v| (*v).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_raw_value_lookup() {
        let table = raw(&["a", "b"], &[&["1", "2"], &["3"]]);
        assert_eq!(table.value(0, 1), Some("2"));
        assert_eq!(table.value(1, 0), Some("3"));
        assert_eq!(table.value(1, 1), None);
        assert_eq!(table.value(5, 0), None);
    }

    #[test]
    fn test_table_from_raw_short_rows() {
        let table = Table::from_raw(&raw(&["a", "b"], &[&["1", "x"], &["2"]]));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);

        let b = table.column(1).unwrap();
        assert_eq!(b.values(), &[Some("x".to_string()), None]);
        assert_eq!(table.row(1), vec![Some("2"), None]);
    }

    #[test]
    fn test_numbers_are_parsed_once() {
        let table = Table::from_raw(&raw(&["v"], &[&["1"], &["x"], &["2.5kg"], &[""]]));
        let column = table.column(0).unwrap();
        assert_eq!(column.numbers(), &[Some(1.0), None, Some(2.5), None]);
        assert_eq!(column.numeric_values(), vec![1.0, 2.5]);
        assert_eq!(column.numeric_count(), 2);
    }

    #[test]
    fn test_duplicate_headers_stay_separate() {
        let table = Table::from_raw(&raw(&["x", "x"], &[&["1", "2"]]));
        assert_eq!(table.headers(), vec!["x", "x"]);
        assert_eq!(table.column(0).unwrap().value(0), Some("1"));
        assert_eq!(table.column(1).unwrap().value(0), Some("2"));
        assert_eq!(table.column_by_name("x").unwrap().value(0), Some("1"));
    }

    #[test]
    fn test_headers_only() {
        let table = Table::from(raw(&["a", "b"], &[]));
        assert_eq!(table.row_count(), 0);
        assert!(table.column(0).unwrap().is_empty());
    }
}
