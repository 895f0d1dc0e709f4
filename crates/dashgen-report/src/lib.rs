//! Presentation adapter for the dashboard generator.
//!
//! Turns an analysis into chart-ready data. See [`dashboard`].

pub mod dashboard;

pub use dashboard::{
    CategoricalPanel, ChartPoint, ColumnPanel, DEFAULT_CHART_SAMPLES, DEFAULT_DISTRIBUTION_LIMIT,
    DEFAULT_PREVIEW_ROWS, Dashboard, DistributionEntry, NumericPanel, PresentationOptions,
    Preview, SummaryCounters, build_dashboard, chart_series, distribution, preview,
};
