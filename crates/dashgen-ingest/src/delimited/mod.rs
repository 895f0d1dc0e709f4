//! Delimited-text reading utilities.

mod field;
mod reader;

pub use field::normalize_field;
pub use reader::{
    IngestOptions, MAX_FILE_SIZE, check_file_size, parse_str, parse_table, read_source,
    read_table_file,
};
