//! Analysis stages for parsed tables.
//!
//! - [`inference`]: numeric vs categorical classification (>50% rule)
//! - [`stats`]: min / max / mean / median / population standard deviation,
//!   distinct counts
//! - [`quality`]: missing values and 2σ outliers
//! - [`correlation`]: pairwise Pearson r, |r| > 0.5, strongest first
//! - [`pipeline`]: all of the above in one pass
//! - [`session`]: caller-owned state that survives rejected loads
//!
//! # Example
//!
//! ```
//! use dashgen_analysis::{AnalysisOptions, analyze_text};
//!
//! let result = analyze_text("x,y\n1,2\n2,4\n3,6\n", &AnalysisOptions::default()).unwrap();
//! assert_eq!(result.numeric_columns, vec!["x", "y"]);
//! assert_eq!(result.correlations.len(), 1);
//! ```

pub mod correlation;
pub mod inference;
pub mod options;
pub mod pipeline;
pub mod quality;
pub mod session;
pub mod stats;

pub use dashgen_ingest::ParseError;
pub use options::{AnalysisOptions, PairingMode};
pub use pipeline::{analyze_bytes, analyze_table, analyze_text};
pub use session::{Dataset, Session};
