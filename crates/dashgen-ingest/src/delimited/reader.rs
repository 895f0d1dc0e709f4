//! Comma-delimited text reading.
//!
//! The format is deliberately plain: lines split on `\n`, fields split on `,`,
//! no quoting or escaping. A `"` is an ordinary character and a comma always
//! ends a field.

use std::path::Path;

use csv::{ReaderBuilder, Terminator};
use dashgen_model::RawTable;

use crate::error::{IngestError, ParseError, Result};

use super::field::{is_blank_line, normalize_field};

/// Default maximum source file size (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Options for reading a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Files larger than this are rejected before reading.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

/// Parses delimited text into a [`RawTable`].
///
/// - Blank and whitespace-only lines are skipped wherever they appear.
/// - The first remaining line is the header row.
/// - Every field is trimmed.
/// - Short rows are kept short; fields beyond the header count are dropped.
///
/// # Errors
///
/// [`ParseError::InvalidUtf8`] for bytes that are not UTF-8 text and
/// [`ParseError::Empty`] when there is no header line.
pub fn parse_table(bytes: &[u8]) -> std::result::Result<RawTable, ParseError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(bytes);

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut short_rows = 0usize;
    let mut dropped_fields = 0usize;

    for record in reader.records() {
        let record = record.map_err(record_error)?;
        if is_blank_line(&record) {
            continue;
        }
        let fields: Vec<String> = record.iter().map(normalize_field).collect();
        let Some(header_row) = headers.as_ref() else {
            headers = Some(fields);
            continue;
        };
        let width = header_row.len();
        let mut row = fields;
        if row.len() < width {
            short_rows += 1;
        } else if row.len() > width {
            dropped_fields += row.len() - width;
            row.truncate(width);
        }
        rows.push(row);
    }

    let headers = headers.ok_or(ParseError::Empty)?;

    if short_rows > 0 {
        tracing::debug!(short_rows, "rows with fewer fields than headers");
    }
    if dropped_fields > 0 {
        tracing::warn!(
            dropped_fields,
            "fields beyond the header count were dropped"
        );
    }
    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        "parsed delimited text"
    );

    Ok(RawTable::new(headers, rows))
}

/// Parses already-decoded text. See [`parse_table`].
pub fn parse_str(text: &str) -> std::result::Result<RawTable, ParseError> {
    parse_table(text.as_bytes())
}

/// Check file size against the configured limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reads a source file's bytes after checking its size.
pub fn read_source(path: &Path, options: &IngestOptions) -> Result<Vec<u8>> {
    check_file_size(path, options.max_file_size)?;
    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source file");
    Ok(bytes)
}

/// Reads and parses a source file.
pub fn read_table_file(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    let bytes = read_source(path, options)?;
    parse_table(&bytes).map_err(|source| IngestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn file_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

fn record_error(err: csv::Error) -> ParseError {
    let line = err.position().map_or(0, csv::Position::line);
    match err.kind() {
        csv::ErrorKind::Utf8 { .. } => ParseError::InvalidUtf8 { line },
        _ => ParseError::Record {
            line,
            message: err.to_string(),
        },
    }
}
