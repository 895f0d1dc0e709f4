//! The caller-owned analysis state.

use dashgen_ingest::ParseError;
use dashgen_model::{AnalysisResult, Table};

use crate::options::AnalysisOptions;
use crate::pipeline::analyze_bytes;

/// One loaded file and everything computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub table: Table,
    pub result: AnalysisResult,
}

impl Dataset {
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: &[u8],
        options: &AnalysisOptions,
    ) -> Result<Self, ParseError> {
        let (table, result) = analyze_bytes(bytes, options)?;
        Ok(Self {
            name: name.into(),
            table,
            result,
        })
    }
}

/// Holds the most recent successfully analysed dataset.
///
/// A load that fails leaves the current dataset untouched; a load that
/// succeeds replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: AnalysisOptions,
    current: Option<Dataset>,
}

impl Session {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options,
            current: None,
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn current(&self) -> Option<&Dataset> {
        self.current.as_ref()
    }

    /// Parses and analyses `bytes`, replacing the current dataset on success.
    pub fn load(&mut self, name: impl Into<String>, bytes: &[u8]) -> Result<&Dataset, ParseError> {
        let name = name.into();
        match Dataset::from_bytes(name.clone(), bytes, &self.options) {
            Ok(dataset) => {
                tracing::info!(
                    source = %name,
                    rows = dataset.result.row_count,
                    columns = dataset.result.column_count,
                    "dataset loaded"
                );
                let dataset: &Dataset = self.current.insert(dataset);
                Ok(dataset)
            }
            Err(error) => {
                tracing::warn!(source = %name, %error, "load rejected, keeping previous dataset");
                Err(error)
            }
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_replaces_dataset() {
        let mut session = Session::default();
        assert!(session.current().is_none());

        session.load("first.csv", b"a\n1\n2\n").unwrap();
        assert_eq!(session.current().unwrap().name, "first.csv");

        let dataset = session.load("second.csv", b"b,c\nx,y\n").unwrap();
        assert_eq!(dataset.name, "second.csv");
        assert_eq!(dataset.result.headers, vec!["b", "c"]);
    }

    #[test]
    fn test_failed_load_keeps_previous() {
        let mut session = Session::default();
        session.load("good.csv", b"a,b\n1,2\n").unwrap();
        let before = session.current().cloned();

        let err = session.load("bad.csv", b"\n \n").unwrap_err();
        assert_eq!(err, ParseError::Empty);
        assert_eq!(session.current().cloned(), before);

        let err = session.load("binary.bin", b"a\n\xFF\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidUtf8 { .. }));
        assert_eq!(session.current().unwrap().name, "good.csv");
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new(AnalysisOptions::default());
        session.load("x.csv", b"a\n1\n").unwrap();
        session.clear();
        assert!(session.current().is_none());
    }
}
