use std::fmt;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dashgen_model::CorrelationEdge;
use dashgen_report::{CategoricalPanel, ColumnPanel, Dashboard, NumericPanel, Preview};

/// Coefficients above this magnitude are described as strong.
pub const STRONG_CORRELATION: f64 = 0.8;

pub fn print_dashboard(dashboard: &Dashboard) {
    print!("{}", DashboardText(dashboard));
}

/// Renders every dashboard section as terminal text.
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    DashboardText(dashboard).to_string()
}

/// Terminal rendering of a [`Dashboard`].
pub struct DashboardText<'a>(pub &'a Dashboard);

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashboard = self.0;
        writeln!(f, "File: {}", dashboard.source)?;
        writeln!(f, "{}", dashboard.counters)?;

        let numeric: Vec<&NumericPanel> = dashboard
            .panels
            .iter()
            .filter_map(|panel| match panel {
                ColumnPanel::Numeric(panel) => Some(panel),
                ColumnPanel::Categorical(_) => None,
            })
            .collect();
        let categorical: Vec<&CategoricalPanel> = dashboard
            .panels
            .iter()
            .filter_map(|panel| match panel {
                ColumnPanel::Categorical(panel) => Some(panel),
                ColumnPanel::Numeric(_) => None,
            })
            .collect();

        if !numeric.is_empty() {
            writeln!(f, "\nNumeric columns:\n{}", numeric_table(&numeric))?;
        }
        if !categorical.is_empty() {
            writeln!(f, "\nCategorical columns:\n{}", categorical_table(&categorical))?;
        }

        if dashboard.correlations.is_empty() {
            writeln!(f, "\nCorrelations: none above threshold")?;
        } else {
            writeln!(f, "\nCorrelations:")?;
            for edge in &dashboard.correlations {
                writeln!(f, "- {}", describe_correlation(edge))?;
            }
        }

        let preview = &dashboard.preview;
        writeln!(f, "\nPreview:\n{}", preview_table(preview))?;
        if preview.is_truncated() {
            writeln!(
                f,
                "Showing {} of {} rows",
                preview.rows.len(),
                preview.total_rows
            )?;
        }
        Ok(())
    }
}

/// One-line description of a correlation, e.g. `x ↔ y: r = 0.93 (strong positive)`.
pub fn describe_correlation(edge: &CorrelationEdge) -> String {
    let strength = if edge.strength() > STRONG_CORRELATION {
        "strong"
    } else {
        "moderate"
    };
    let direction = if edge.coefficient < 0.0 {
        "negative"
    } else {
        "positive"
    };
    format!(
        "{} ↔ {}: r = {} ({strength} {direction})",
        edge.column_a,
        edge.column_b,
        format_stat(edge.coefficient)
    )
}

pub fn format_stat(value: f64) -> String {
    format!("{value:.2}")
}

fn numeric_table(panels: &[&NumericPanel]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Mean"),
        header_cell("Median"),
        header_cell("Std dev"),
        header_cell("Missing"),
        header_cell("Outliers"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..9 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for panel in panels {
        let summary = &panel.summary;
        table.add_row(vec![
            name_cell(&panel.name),
            Cell::new(summary.count),
            Cell::new(format_stat(summary.min)),
            Cell::new(format_stat(summary.max)),
            Cell::new(format_stat(summary.mean)),
            Cell::new(format_stat(summary.median)),
            Cell::new(format_stat(summary.std_dev)),
            count_cell(Some(panel.quality.missing_count), Color::Yellow),
            count_cell(panel.quality.outlier_count, Color::Red),
        ]);
    }
    table
}

fn categorical_table(panels: &[&CategoricalPanel]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Distinct"),
        header_cell("Missing"),
        header_cell("Top values"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for panel in panels {
        let top = panel
            .distribution
            .iter()
            .take(3)
            .map(|entry| match &entry.value {
                Some(value) => format!("{value} ({})", entry.count),
                None => format!("<absent> ({})", entry.count),
            })
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            name_cell(&panel.name),
            Cell::new(panel.distinct_count),
            count_cell(Some(panel.quality.missing_count), Color::Yellow),
            Cell::new(top),
        ]);
    }
    table
}

fn preview_table(preview: &Preview) -> Table {
    let mut table = Table::new();
    table.set_header(preview.headers.iter().map(|h| header_cell(h)));
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    for row in &preview.rows {
        table.add_row(row.iter().map(|value| match value {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        }));
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn name_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(coefficient: f64) -> CorrelationEdge {
        CorrelationEdge {
            column_a: "x".to_string(),
            column_b: "y".to_string(),
            coefficient,
        }
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(2.0), "2.00");
        assert_eq!(format_stat(1.234_56), "1.23");
        assert_eq!(format_stat(-0.5), "-0.50");
    }

    #[test]
    fn test_strength_boundary() {
        assert!(describe_correlation(&edge(0.8)).ends_with("(moderate positive)"));
        assert!(describe_correlation(&edge(-0.81)).ends_with("(strong negative)"));
    }
}
