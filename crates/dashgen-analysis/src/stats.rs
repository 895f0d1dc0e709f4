//! Descriptive statistics.

use std::collections::HashSet;

use dashgen_model::{CategoricalSummary, NumericSummary};

/// Power of two that brings the largest magnitude in `values` to at most 2.
///
/// Scaling by a power of two is exact, so sums and squares taken on scaled
/// values round exactly as the unscaled ones would, without overflowing.
pub fn unit_scale(values: &[f64]) -> f64 {
    let max = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if max == 0.0 || !max.is_finite() {
        return 1.0;
    }
    let exponent = (max.log2().ceil() as i32).clamp(-1000, 1023);
    2.0_f64.powi(-exponent)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let scale = unit_scale(values);
    let sum: f64 = values.iter().map(|v| v * scale).sum();
    Some(sum / values.len() as f64 / scale)
}

/// Middle value of the ascending sort; average of the two middle values for
/// an even count.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    }
}

/// Population standard deviation around a precomputed mean.
pub fn population_std_dev(values: &[f64], mean: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let scale = unit_scale(values);
    let centre = mean * scale;
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let d = v * scale - centre;
            d * d
        })
        .sum();
    Some((sum_sq / values.len() as f64).sqrt() / scale)
}

/// Summary over parsed values, `None` for an empty slice.
pub fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    let mean = mean(values)?;
    let median = median(values)?;
    let std_dev = population_std_dev(values, mean)?;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(NumericSummary {
        count: values.len(),
        min,
        max,
        mean,
        median,
        std_dev,
    })
}

/// Distinct raw values by exact string equality.
///
/// An empty string and an absent value are two separate buckets.
pub fn distinct_count(values: &[Option<String>]) -> usize {
    values
        .iter()
        .map(Option::as_deref)
        .collect::<HashSet<Option<&str>>>()
        .len()
}

pub fn categorical_summary(values: &[Option<String>]) -> CategoricalSummary {
    CategoricalSummary {
        distinct_count: distinct_count(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn test_reference_dataset() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = numeric_summary(&values).unwrap();
        assert_eq!(summary.count, 8);
        assert!(approx(summary.mean, 5.0));
        assert!(approx(summary.std_dev, 2.0));
        assert!(approx(summary.median, 4.5));
        assert!(approx(summary.min, 2.0));
        assert!(approx(summary.max, 9.0));
    }

    #[test]
    fn test_median_odd_and_unsorted() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), Some(5.0));
        assert_eq!(median(&[3.0, -1.0]), Some(1.0));
        assert_eq!(median(&[7.0]), Some(7.0));
    }

    #[test]
    fn test_std_dev_is_population() {
        // Sample std dev of [1, 3] would be sqrt(2); population is 1.
        let summary = numeric_summary(&[1.0, 3.0]).unwrap();
        assert!(approx(summary.std_dev, 1.0));
    }

    #[test]
    fn test_single_value() {
        let summary = numeric_summary(&[42.0]).unwrap();
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.max, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_negative_values() {
        let summary = numeric_summary(&[-5.0, -1.0, -3.0]).unwrap();
        assert_eq!(summary.min, -5.0);
        assert_eq!(summary.max, -1.0);
        assert!(approx(summary.mean, -3.0));
    }

    #[test]
    fn test_empty_has_no_summary() {
        assert!(numeric_summary(&[]).is_none());
        assert!(mean(&[]).is_none());
        assert!(median(&[]).is_none());
    }

    #[test]
    fn test_huge_values_stay_finite() {
        let summary = numeric_summary(&[1e308, 1e308]).unwrap();
        assert_eq!(summary.mean, 1e308);
        assert_eq!(summary.median, 1e308);
        assert_eq!(summary.std_dev, 0.0);

        let summary = numeric_summary(&[1e308, -1e308]).unwrap();
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.median, 0.0);
        assert!(summary.std_dev.is_finite());
        assert!((summary.std_dev / 1e308 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_scale() {
        assert_eq!(unit_scale(&[]), 1.0);
        assert_eq!(unit_scale(&[0.0, -0.0]), 1.0);
        assert_eq!(unit_scale(&[3.0, -1.0]), 0.25);
        assert_eq!(unit_scale(&[-8.0]), 0.125);
        assert!(1e308 * unit_scale(&[1e308]) <= 2.0);
    }

    #[test]
    fn test_distinct_count_buckets() {
        let values = vec![
            Some("a".to_string()),
            Some("A".to_string()),
            Some("a".to_string()),
            Some(String::new()),
            None,
            None,
        ];
        // "a", "A", "", absent
        assert_eq!(distinct_count(&values), 4);
        assert_eq!(categorical_summary(&values).distinct_count, 4);
    }

    #[test]
    fn test_distinct_count_empty() {
        assert_eq!(distinct_count(&[]), 0);
    }
}
