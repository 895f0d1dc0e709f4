//! Pairwise Pearson correlation across numeric columns.

use dashgen_model::{Column, CorrelationEdge, Table};

use crate::options::PairingMode;
use crate::stats::unit_scale;

/// Pairs are kept only when `|r|` strictly exceeds this.
pub const CORRELATION_THRESHOLD: f64 = 0.5;

/// Pearson correlation coefficient over `x` and `y`, truncated to the shorter
/// length.
///
/// `r = Σ(x−x̄)(y−ȳ) / sqrt(Σ(x−x̄)² Σ(y−ȳ)²)`, with `r = 0` when the
/// denominator is zero (including fewer than two samples or a constant
/// series). Each series is first scaled by a power of two so the sums cannot
/// overflow. The result is clamped into `[-1, 1]`.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let (scale_x, scale_y) = (unit_scale(x), unit_scale(y));

    let count = n as f64;
    let mean_x = x.iter().map(|a| a * scale_x).sum::<f64>() / count;
    let mean_y = y.iter().map(|b| b * scale_y).sum::<f64>() / count;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a * scale_x - mean_x;
        let dy = b * scale_y - mean_y;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denominator = (sum_xx * sum_yy).sqrt();
    if denominator.is_nan() || denominator <= 0.0 {
        return 0.0;
    }
    (sum_xy / denominator).clamp(-1.0, 1.0)
}

/// Builds the paired samples for two columns under `mode`.
pub fn paired_samples(a: &Column, b: &Column, mode: PairingMode) -> (Vec<f64>, Vec<f64>) {
    match mode {
        PairingMode::Positional => {
            let mut xs = a.numeric_values();
            let mut ys = b.numeric_values();
            let n = xs.len().min(ys.len());
            xs.truncate(n);
            ys.truncate(n);
            (xs, ys)
        }
        PairingMode::RowAligned => a
            .numbers()
            .iter()
            .zip(b.numbers())
            .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
            .unzip(),
    }
}

/// Correlates every unordered pair of the given numeric columns.
///
/// Pairs follow the order of `numeric`: `(i, j)` with `i < j`. Only pairs
/// with `|r| > 0.5` are returned, strongest first; equal strengths keep
/// discovery order.
pub fn correlate(table: &Table, numeric: &[usize], mode: PairingMode) -> Vec<CorrelationEdge> {
    let columns: Vec<&Column> = numeric
        .iter()
        .filter_map(|&idx| table.column(idx))
        .collect();

    let mut edges = Vec::new();
    let mut evaluated = 0usize;
    for (i, a) in columns.iter().enumerate() {
        for b in &columns[i + 1..] {
            let (xs, ys) = paired_samples(a, b, mode);
            let coefficient = pearson(&xs, &ys);
            evaluated += 1;
            if coefficient.abs() > CORRELATION_THRESHOLD {
                edges.push(CorrelationEdge {
                    column_a: a.name().to_string(),
                    column_b: b.name().to_string(),
                    coefficient,
                });
            }
        }
    }

    // Vec::sort_by is stable.
    edges.sort_by(|a, b| b.strength().total_cmp(&a.strength()));
    tracing::debug!(
        pairs = evaluated,
        retained = edges.len(),
        ?mode,
        "computed correlations"
    );
    edges
}
