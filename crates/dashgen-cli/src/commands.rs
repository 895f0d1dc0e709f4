use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use dashgen_analysis::{AnalysisOptions, PairingMode, Session};
use dashgen_cli::logging::redact_value;
use dashgen_ingest::{IngestOptions, read_source};
use dashgen_report::{Dashboard, PresentationOptions, build_dashboard};

use crate::cli::AnalyzeArgs;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<Dashboard> {
    let source = args
        .file
        .file_name()
        .map_or_else(|| args.file.display().to_string(), |name| {
            name.to_string_lossy().into_owned()
        });
    let span = info_span!("analyze_file", source = %source);
    let _guard = span.enter();
    let start = Instant::now();

    let ingest = IngestOptions::default().with_max_file_size(args.max_size);
    let bytes = read_source(&args.file, &ingest)
        .with_context(|| format!("read {}", args.file.display()))?;

    let pairing = if args.row_aligned {
        PairingMode::RowAligned
    } else {
        PairingMode::Positional
    };
    let mut session = Session::new(AnalysisOptions::default().with_pairing(pairing));
    let dataset = session
        .load(source.clone(), &bytes)
        .with_context(|| format!("parse {}", args.file.display()))?;

    if let Some(first) = dataset.table.row(0).first().copied().flatten() {
        trace!(value = redact_value(first), "first cell");
    }

    let presentation = PresentationOptions::default()
        .with_preview_rows(args.preview_rows)
        .with_chart_samples(args.chart_samples)
        .with_distribution_limit(args.top_values);
    let dashboard = build_dashboard(&source, &dataset.table, &dataset.result, &presentation);
    info!(
        panels = dashboard.panels.len(),
        correlations = dashboard.correlations.len(),
        duration_ms = start.elapsed().as_millis(),
        "dashboard built"
    );
    Ok(dashboard)
}
