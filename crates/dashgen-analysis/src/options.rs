//! Analysis options.

/// How two numeric columns are paired for correlation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairingMode {
    /// Each column drops its own non-numeric values, then the two parsed
    /// sequences are paired by position and truncated to the shorter one.
    /// Rows drift out of alignment when the columns miss values in different
    /// rows.
    #[default]
    Positional,
    /// Only rows where both columns parsed are paired.
    RowAligned,
}

/// Options controlling an analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub pairing: PairingMode,
}

impl AnalysisOptions {
    #[must_use]
    pub fn with_pairing(mut self, pairing: PairingMode) -> Self {
        self.pairing = pairing;
        self
    }
}
