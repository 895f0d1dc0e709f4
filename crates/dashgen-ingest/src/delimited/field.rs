//! Field normalization.

/// Trims surrounding whitespace and byte-order marks from a field.
///
/// A trailing `\r` left by CRLF line endings is whitespace and goes too.
pub fn normalize_field(raw: &str) -> String {
    raw.trim_matches(is_trimmable).to_string()
}

/// True when a line carries no content at all and should be skipped.
pub fn is_blank_line(fields: &csv::StringRecord) -> bool {
    match fields.len() {
        0 => true,
        1 => fields[0].trim_matches(is_trimmable).is_empty(),
        _ => false,
    }
}

fn is_trimmable(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_field() {
        assert_eq!(normalize_field("  hello  "), "hello");
        assert_eq!(normalize_field("value\r"), "value");
        assert_eq!(normalize_field("\u{feff}id"), "id");
        assert_eq!(normalize_field("a b"), "a b");
        assert_eq!(normalize_field("   "), "");
    }

    #[test]
    fn test_is_blank_line() {
        assert!(is_blank_line(&csv::StringRecord::from(vec!["  \r"])));
        assert!(is_blank_line(&csv::StringRecord::from(vec![""])));
        assert!(!is_blank_line(&csv::StringRecord::from(vec!["", ""])));
        assert!(!is_blank_line(&csv::StringRecord::from(vec!["x"])));
    }
}
