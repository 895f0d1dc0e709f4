//! Leading-numeral parsing for raw cell values.
//!
//! Cells are classified as numeric with a permissive rule: the longest prefix
//! that forms a decimal number is parsed and anything after it is ignored.
//! This is what lets `"12kg"` count as `12` while `"kg12"` does not count at
//! all.

/// Parses the longest decimal-number prefix of `raw`.
///
/// Grammar of the accepted prefix (after leading whitespace):
///
/// - optional `+` or `-`
/// - digits with at most one `.`, at least one digit overall
///   (`"5."` and `".5"` are accepted, `"."` is not)
/// - optional exponent `e`/`E` with optional sign, consumed only when at least
///   one exponent digit follows (`"1e"` parses as `1`)
///
/// Returns `None` when no prefix matches or when the value is not finite
/// (`"Infinity"`, `"NaN"`, `"1e400"`).
///
/// ```
/// use dashgen_model::parse_leading_f64;
///
/// assert_eq!(parse_leading_f64("12abc"), Some(12.0));
/// assert_eq!(parse_leading_f64("-.5"), Some(-0.5));
/// assert_eq!(parse_leading_f64("1e3x"), Some(1000.0));
/// assert_eq!(parse_leading_f64("abc"), None);
/// ```
pub fn parse_leading_f64(raw: &str) -> Option<f64> {
    let text = raw.trim_start_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}');
    let bytes = text.as_bytes();
    let mut end = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let frac_end = skip_digits(bytes, frac_start);
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_end = skip_digits(bytes, exp_end);
        if exp_digits_end > exp_end {
            end = exp_digits_end;
        }
    }

    let value: f64 = text[..end].parse().ok()?;
    value.is_finite().then_some(value)
}

/// Returns true when `raw` is present and parses via [`parse_leading_f64`].
pub fn is_numeric_value(raw: Option<&str>) -> bool {
    raw.and_then(parse_leading_f64).is_some()
}

fn skip_digits(bytes: &[u8], mut idx: usize) -> usize {
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_leading_f64("42"), Some(42.0));
        assert_eq!(parse_leading_f64("-3.25"), Some(-3.25));
        assert_eq!(parse_leading_f64("+7"), Some(7.0));
        assert_eq!(parse_leading_f64("0"), Some(0.0));
    }

    #[test]
    fn test_partial_decimal_forms() {
        assert_eq!(parse_leading_f64(".5"), Some(0.5));
        assert_eq!(parse_leading_f64("5."), Some(5.0));
        assert_eq!(parse_leading_f64("."), None);
        assert_eq!(parse_leading_f64("-"), None);
        assert_eq!(parse_leading_f64("+."), None);
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_leading_f64("12abc"), Some(12.0));
        assert_eq!(parse_leading_f64("3.5 kg"), Some(3.5));
        assert_eq!(parse_leading_f64("1.2.3"), Some(1.2));
        assert_eq!(parse_leading_f64("0x10"), Some(0.0));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_leading_f64("1e3"), Some(1000.0));
        assert_eq!(parse_leading_f64("2.5E-1"), Some(0.25));
        assert_eq!(parse_leading_f64("1e"), Some(1.0));
        assert_eq!(parse_leading_f64("1e+"), Some(1.0));
        assert_eq!(parse_leading_f64("4e2px"), Some(400.0));
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(parse_leading_f64(""), None);
        assert_eq!(parse_leading_f64("abc"), None);
        assert_eq!(parse_leading_f64("a1"), None);
        assert_eq!(parse_leading_f64("Infinity"), None);
        assert_eq!(parse_leading_f64("NaN"), None);
        assert_eq!(parse_leading_f64("inf"), None);
    }

    #[test]
    fn test_overflow_is_not_finite() {
        assert_eq!(parse_leading_f64("1e400"), None);
        assert_eq!(parse_leading_f64("-1e400"), None);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_leading_f64("  8"), Some(8.0));
        assert_eq!(parse_leading_f64("\u{feff}9"), Some(9.0));
    }

    #[test]
    fn test_is_numeric_value() {
        assert!(is_numeric_value(Some("1")));
        assert!(!is_numeric_value(Some("")));
        assert!(!is_numeric_value(None));
    }
}
