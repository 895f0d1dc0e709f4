//! End-to-end analysis of a parsed table.

use dashgen_ingest::{ParseError, parse_table};
use dashgen_model::{AnalysisResult, ColumnReport, ColumnSummary, Table};
use tracing::{debug, info_span, warn};

use crate::correlation::correlate;
use crate::inference::classify_table;
use crate::options::AnalysisOptions;
use crate::quality::column_quality;
use crate::stats::{categorical_summary, numeric_summary};

/// Runs classification, statistics, quality checks and correlation over a
/// table.
///
/// A column classified numeric whose parsed set turns out empty is reported
/// as categorical so that no undefined statistic reaches the result.
pub fn analyze_table(table: &Table, options: &AnalysisOptions) -> AnalysisResult {
    let span = info_span!(
        "analyze",
        rows = table.row_count(),
        columns = table.column_count()
    );
    let _guard = span.enter();

    let classification = classify_table(table);
    let mut numeric_indices = Vec::with_capacity(classification.numeric.len());
    let mut reports = Vec::with_capacity(table.column_count());

    for (idx, column) in table.columns().iter().enumerate() {
        let numeric = if classification.numeric.contains(&idx) {
            let summary = numeric_summary(&column.numeric_values());
            if summary.is_none() {
                warn!(
                    column = column.name(),
                    "numeric column has no parsed values, reporting as categorical"
                );
            }
            summary
        } else {
            None
        };

        let summary = match numeric {
            Some(stats) => {
                numeric_indices.push(idx);
                ColumnSummary::Numeric(stats)
            }
            None => ColumnSummary::Categorical(categorical_summary(column.values())),
        };
        let quality = column_quality(column, summary.as_numeric());
        reports.push(ColumnReport {
            name: column.name().to_string(),
            index: idx,
            summary,
            quality,
        });
    }

    let correlations = correlate(table, &numeric_indices, options.pairing);

    let mut numeric_columns = Vec::new();
    let mut categorical_columns = Vec::new();
    for report in &reports {
        match report.summary {
            ColumnSummary::Numeric(_) => numeric_columns.push(report.name.clone()),
            ColumnSummary::Categorical(_) => categorical_columns.push(report.name.clone()),
        }
    }

    debug!(
        numeric = numeric_columns.len(),
        categorical = categorical_columns.len(),
        correlations = correlations.len(),
        "analysis complete"
    );

    AnalysisResult {
        row_count: table.row_count(),
        column_count: table.column_count(),
        headers: table.headers(),
        numeric_columns,
        categorical_columns,
        columns: reports,
        correlations,
    }
}

/// Parses raw bytes and analyses them in one step.
///
/// Returns the table alongside the result; presentation needs both.
pub fn analyze_bytes(
    bytes: &[u8],
    options: &AnalysisOptions,
) -> Result<(Table, AnalysisResult), ParseError> {
    let raw = parse_table(bytes)?;
    let table = Table::from(raw);
    let result = analyze_table(&table, options);
    Ok((table, result))
}

/// Parses and analyses text. See [`analyze_bytes`].
pub fn analyze_text(text: &str, options: &AnalysisOptions) -> Result<AnalysisResult, ParseError> {
    analyze_bytes(text.as_bytes(), options).map(|(_, result)| result)
}
