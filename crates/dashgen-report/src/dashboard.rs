//! Dashboard view model.
//!
//! Shapes an [`AnalysisResult`] and its [`Table`] into the pieces a front end
//! draws: three counters, one panel per column, the ranked correlation list
//! and a row preview. Nothing here renders; hosts decide how to draw it.

use std::collections::HashMap;
use std::fmt;

use dashgen_model::{
    AnalysisResult, Column, ColumnSummary, CorrelationEdge, NumericSummary, QualityMetrics, Table,
};
use serde::{Deserialize, Serialize};

/// Default number of preview rows.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;
/// Default number of values in a numeric chart series.
pub const DEFAULT_CHART_SAMPLES: usize = 20;
/// Default number of buckets in a categorical distribution.
pub const DEFAULT_DISTRIBUTION_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationOptions {
    pub preview_rows: usize,
    pub chart_samples: usize,
    pub distribution_limit: usize,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
            chart_samples: DEFAULT_CHART_SAMPLES,
            distribution_limit: DEFAULT_DISTRIBUTION_LIMIT,
        }
    }
}

impl PresentationOptions {
    #[must_use]
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    #[must_use]
    pub fn with_chart_samples(mut self, samples: usize) -> Self {
        self.chart_samples = samples;
        self
    }

    #[must_use]
    pub fn with_distribution_limit(mut self, limit: usize) -> Self {
        self.distribution_limit = limit;
        self
    }
}

/// The three headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounters {
    pub rows: usize,
    pub columns: usize,
    pub numeric_columns: usize,
}

impl fmt::Display for SummaryCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows: {} | columns: {} | numeric: {}",
            self.rows, self.columns, self.numeric_columns
        )
    }
}

/// One bar of a numeric chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub value: f64,
    /// Bar height relative to the series maximum, `0..=100`.
    pub height_pct: f64,
}

/// One bucket of a categorical distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Raw value; `None` for rows where the field was absent.
    pub value: Option<String>,
    pub count: usize,
    /// Bar width relative to the largest bucket, `0..=100`.
    pub width_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericPanel {
    pub name: String,
    pub summary: NumericSummary,
    pub quality: QualityMetrics,
    pub series: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalPanel {
    pub name: String,
    pub distinct_count: usize,
    pub quality: QualityMetrics,
    pub distribution: Vec<DistributionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnPanel {
    Numeric(NumericPanel),
    Categorical(CategoricalPanel),
}

impl ColumnPanel {
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric(panel) => &panel.name,
            Self::Categorical(panel) => &panel.name,
        }
    }
}

/// First rows of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
    pub total_rows: usize,
}

impl Preview {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_rows
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub source: String,
    pub counters: SummaryCounters,
    /// Numeric panels first, then categorical, each group in header order.
    pub panels: Vec<ColumnPanel>,
    pub correlations: Vec<CorrelationEdge>,
    pub preview: Preview,
}

impl Dashboard {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds the dashboard for an analysed table.
pub fn build_dashboard(
    source: &str,
    table: &Table,
    result: &AnalysisResult,
    options: &PresentationOptions,
) -> Dashboard {
    let counters = SummaryCounters {
        rows: result.row_count,
        columns: result.column_count,
        numeric_columns: result.numeric_count(),
    };

    let mut numeric_panels = Vec::new();
    let mut categorical_panels = Vec::new();
    for report in &result.columns {
        let Some(column) = table.column(report.index) else {
            continue;
        };
        match report.summary {
            ColumnSummary::Numeric(summary) => {
                numeric_panels.push(ColumnPanel::Numeric(NumericPanel {
                    name: report.name.clone(),
                    summary,
                    quality: report.quality,
                    series: chart_series(column, options.chart_samples),
                }));
            }
            ColumnSummary::Categorical(summary) => {
                categorical_panels.push(ColumnPanel::Categorical(CategoricalPanel {
                    name: report.name.clone(),
                    distinct_count: summary.distinct_count,
                    quality: report.quality,
                    distribution: distribution(column, options.distribution_limit),
                }));
            }
        }
    }
    numeric_panels.extend(categorical_panels);

    Dashboard {
        source: source.to_string(),
        counters,
        panels: numeric_panels,
        correlations: result.correlations.clone(),
        preview: preview(table, options.preview_rows),
    }
}

/// First `limit` parsed values of a column with bar heights.
pub fn chart_series(column: &Column, limit: usize) -> Vec<ChartPoint> {
    let values: Vec<f64> = column.numbers().iter().flatten().copied().take(limit).collect();
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values
        .into_iter()
        .map(|value| ChartPoint {
            value,
            height_pct: percent_of(value, max),
        })
        .collect()
}

/// Most frequent raw values, at most `limit`, by descending count; ties keep
/// first-seen order.
pub fn distribution(column: &Column, limit: usize) -> Vec<DistributionEntry> {
    let mut order: Vec<(Option<&str>, usize)> = Vec::new();
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    for value in column.values().iter().map(Option::as_deref) {
        match index.get(&value) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(value, order.len());
                order.push((value, 1));
            }
        }
    }
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(limit);

    let max = order.first().map_or(0, |(_, count)| *count) as f64;
    order
        .into_iter()
        .map(|(value, count)| DistributionEntry {
            value: value.map(str::to_string),
            count,
            width_pct: percent_of(count as f64, max),
        })
        .collect()
}

pub fn preview(table: &Table, limit: usize) -> Preview {
    let shown = table.row_count().min(limit);
    Preview {
        headers: table.headers(),
        rows: (0..shown)
            .map(|row| {
                table
                    .row(row)
                    .into_iter()
                    .map(|value| value.map(str::to_string))
                    .collect()
            })
            .collect(),
        total_rows: table.row_count(),
    }
}

fn percent_of(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[Option<&str>]) -> Column {
        Column::new("c", values.iter().map(|v| v.map(str::to_string)).collect())
    }

    #[test]
    fn test_chart_series_limit_and_heights() {
        let values: Vec<String> = (1..=30).map(|v| v.to_string()).collect();
        let col = Column::new("n", values.into_iter().map(Some).collect());
        let series = chart_series(&col, 20);
        assert_eq!(series.len(), 20);
        assert_eq!(series[0].value, 1.0);
        assert_eq!(series[19].height_pct, 100.0);
        assert!((series[9].height_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_chart_series_skips_non_numeric() {
        let col = column(&[Some("4"), Some("x"), None, Some("2")]);
        let series = chart_series(&col, 20);
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![4.0, 2.0]);
    }

    #[test]
    fn test_chart_series_non_positive_max() {
        let col = column(&[Some("-1"), Some("-2")]);
        assert!(chart_series(&col, 20).iter().all(|p| p.height_pct == 0.0));
    }

    #[test]
    fn test_distribution_order_and_ties() {
        let col = column(&[
            Some("b"),
            Some("a"),
            Some("a"),
            None,
            Some("b"),
            Some("c"),
            Some("a"),
        ]);
        let dist = distribution(&col, 10);
        let keys: Vec<(Option<&str>, usize)> = dist
            .iter()
            .map(|entry| (entry.value.as_deref(), entry.count))
            .collect();
        assert_eq!(
            keys,
            vec![(Some("a"), 3), (Some("b"), 2), (None, 1), (Some("c"), 1)]
        );
        assert_eq!(dist[0].width_pct, 100.0);
    }

    #[test]
    fn test_distribution_limit() {
        let values: Vec<String> = (0..15).map(|v| format!("v{v}")).collect();
        let col = Column::new("k", values.into_iter().map(Some).collect());
        assert_eq!(distribution(&col, 10).len(), 10);
    }

    #[test]
    fn test_counters_display() {
        let counters = SummaryCounters {
            rows: 3,
            columns: 2,
            numeric_columns: 1,
        };
        assert_eq!(counters.to_string(), "rows: 3 | columns: 2 | numeric: 1");
    }
}
