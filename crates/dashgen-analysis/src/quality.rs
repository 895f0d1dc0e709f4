//! Missing-value and outlier counts.

use dashgen_model::{Column, NumericSummary, QualityMetrics};

use crate::stats::unit_scale;

/// Outlier threshold in population standard deviations.
pub const OUTLIER_SIGMA: f64 = 2.0;

/// Values that are the empty string or absent.
pub fn missing_count(values: &[Option<String>]) -> usize {
    values
        .iter()
        .filter(|value| value.as_deref().is_none_or(str::is_empty))
        .count()
}

/// Values with `|v - mean| > 2 * std_dev`. Zero when the spread is zero.
pub fn outlier_count(values: &[f64], mean: f64, std_dev: f64) -> usize {
    if std_dev <= 0.0 || !std_dev.is_finite() {
        return 0;
    }
    let scale = unit_scale(values);
    let centre = mean * scale;
    let limit = OUTLIER_SIGMA * std_dev * scale;
    values
        .iter()
        .filter(|&&value| (value * scale - centre).abs() > limit)
        .count()
}

/// Quality metrics for a column; outliers only when `numeric` is given.
pub fn column_quality(column: &Column, numeric: Option<&NumericSummary>) -> QualityMetrics {
    let outlier_count = numeric.map(|summary| {
        outlier_count(&column.numeric_values(), summary.mean, summary.std_dev)
    });
    QualityMetrics {
        missing_count: missing_count(column.values()),
        outlier_count,
    }
}
