use serde::{Deserialize, Serialize};

/// Column classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Descriptive statistics over the parsed values of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Number of parsed values the statistics were computed from.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (divides by `count`).
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Distinct raw values; empty string and absent are separate buckets.
    pub distinct_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

impl ColumnSummary {
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Numeric(_) => ColumnKind::Numeric,
            Self::Categorical(_) => ColumnKind::Categorical,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericSummary> {
        match self {
            Self::Numeric(summary) => Some(summary),
            Self::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalSummary> {
        match self {
            Self::Categorical(summary) => Some(summary),
            Self::Numeric(_) => None,
        }
    }
}

/// Data quality counts for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Values that are empty or absent.
    pub missing_count: usize,
    /// Values more than two standard deviations from the mean. Numeric only.
    pub outlier_count: Option<usize>,
}

/// Everything computed for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    /// Header position in the source file.
    pub index: usize,
    pub summary: ColumnSummary,
    pub quality: QualityMetrics,
}

impl ColumnReport {
    pub fn kind(&self) -> ColumnKind {
        self.summary.kind()
    }
}
