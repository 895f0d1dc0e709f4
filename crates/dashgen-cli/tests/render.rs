//! Rendering tests for the terminal dashboard.

use dashgen_analysis::Session;
use dashgen_cli::summary::{DashboardText, describe_correlation, render_dashboard};
use dashgen_report::{Dashboard, PresentationOptions, build_dashboard};

fn dashboard(name: &str, content: &str, preview_rows: usize) -> Dashboard {
    let mut session = Session::default();
    let dataset = session.load(name, content.as_bytes()).unwrap();
    let options = PresentationOptions::default().with_preview_rows(preview_rows);
    build_dashboard(name, &dataset.table, &dataset.result, &options)
}

#[test]
fn test_correlation_lines() {
    let dashboard = dashboard("lines.csv", "x,y,w\n1,2,4\n2,4,3\n3,6,2\n4,8,1\n", 10);
    let lines = dashboard
        .correlations
        .iter()
        .map(describe_correlation)
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(lines, @r"
    x ↔ y: r = 1.00 (strong positive)
    x ↔ w: r = -1.00 (strong negative)
    y ↔ w: r = -1.00 (strong negative)
    ");
}

#[test]
fn test_counters_line() {
    let dashboard = dashboard("c.csv", "a,b,c\n1,x,2\n3,y,4\n", 10);
    insta::assert_snapshot!(dashboard.counters.to_string(), @"rows: 2 | columns: 3 | numeric: 2");
}

#[test]
fn test_render_sections() {
    let dashboard = dashboard(
        "sales.csv",
        "region,units,price\nnorth,10,2.5\nsouth,20,3.5\nnorth,,4.5\n",
        10,
    );
    let text = render_dashboard(&dashboard);
    assert!(text.starts_with("File: sales.csv\n"));
    assert!(text.contains("rows: 3 | columns: 3 | numeric: 2"));
    assert!(text.contains("Numeric columns:"));
    assert!(text.contains("Categorical columns:"));
    assert!(text.contains("north (2)"));
    assert!(text.contains("units ↔ price: r = 1.00 (strong positive)"));
    assert!(!text.contains("Showing"));
}

#[test]
fn test_render_truncated_preview() {
    let dashboard = dashboard("n.csv", "n\n1\n2\n3\n4\n5\n", 2);
    let text = render_dashboard(&dashboard);
    assert!(text.contains("Correlations: none above threshold"));
    assert!(text.contains("Showing 2 of 5 rows"));
}

#[test]
fn test_json_output_shape() {
    let dashboard = dashboard("j.csv", "k,v\na,1\nb,2\n", 10);
    let json = dashboard.to_json().unwrap();
    assert!(json.contains("\"source\": \"j.csv\""));
    assert!(json.contains("\"kind\": \"numeric\""));
    assert!(json.contains("\"kind\": \"categorical\""));
}

#[test]
fn test_sections_in_order() {
    let dashboard = dashboard("o.csv", "k,v,w\na,1,2\nb,2,4\nc,3,7\n", 10);
    let text = render_dashboard(&dashboard);
    assert_eq!(text, DashboardText(&dashboard).to_string());

    let position = |label: &str| text.find(label).unwrap();
    assert!(position("rows: 3 | columns: 3 | numeric: 2") < position("\nNumeric columns:\n"));
    assert!(position("\nNumeric columns:\n") < position("\nCategorical columns:\n"));
    assert!(position("\nCategorical columns:\n") < position("\nCorrelations:\n- v ↔ w"));
    assert!(position("\nCorrelations:\n") < position("\nPreview:\n"));
    assert!(text.ends_with('\n'));
}
