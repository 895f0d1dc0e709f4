//! Error types for loading and parsing delimited text.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning text into a table.
///
/// None of these leave a partial table behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No non-blank line, so there is no header row.
    #[error("no header row: input is empty or contains only blank lines")]
    Empty,

    /// Bytes are not valid UTF-8.
    #[error("input is not valid UTF-8 text (line {line})")]
    InvalidUtf8 { line: u64 },

    /// Any other failure reported by the record reader.
    #[error("malformed record at line {line}: {message}")]
    Record { line: u64, message: String },
}

/// Errors that can occur while reading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, limit is {max_size} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Parsing Errors ===
    /// File content could not be parsed.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/file.csv");
    }

    #[test]
    fn test_parse_error_is_source() {
        let err = IngestError::Parse {
            path: PathBuf::from("data.csv"),
            source: ParseError::InvalidUtf8 { line: 3 },
        };
        assert_eq!(
            err.to_string(),
            "failed to parse data.csv: input is not valid UTF-8 text (line 3)"
        );
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "input is not valid UTF-8 text (line 3)");
    }
}
