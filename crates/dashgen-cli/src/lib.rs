//! CLI library components for the dashboard generator.

pub mod logging;
pub mod summary;
