//! Delimited-text ingestion for the dashboard generator.
//!
//! Turns raw file content into a [`RawTable`](dashgen_model::RawTable):
//! header row plus positionally paired data rows, every field trimmed.
//!
//! # Example
//!
//! ```
//! use dashgen_ingest::parse_str;
//!
//! let table = parse_str("name,score\nada,91\n\nbob\n").unwrap();
//! assert_eq!(table.headers, vec!["name", "score"]);
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.value(1, 1), None);
//! ```

mod delimited;
mod error;

// === Error Types ===
pub use error::{IngestError, ParseError, Result};

// === Reading ===
pub use delimited::{
    IngestOptions, MAX_FILE_SIZE, check_file_size, normalize_field, parse_str, parse_table,
    read_source, read_table_file,
};
