//! Report rendering for CLI output

use clap::ValueEnum;
use comfy_table::{presets, Attribute, Cell, CellAlignment, Row, Table};
use console::{colors_enabled, measure_text_width};
use sloclib::{ReportTable, TableRow};

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Aligned text table with a TOTAL footer
    #[default]
    Table,
    /// The report table as JSON
    Json,
    /// One CSV line per row, footer last
    Csv,
}

/// Render a table in the selected mode
pub fn render(table: &ReportTable, mode: OutputMode) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Table => Ok(render_table(table)),
        OutputMode::Json => serde_json::to_string_pretty(table).map(|mut s| {
            s.push('\n');
            s
        }),
        OutputMode::Csv => Ok(render_csv(table)),
    }
}

fn table_row(row: &TableRow, bold: bool) -> Row {
    let cells = std::iter::once(&row.label)
        .chain(&row.values)
        .map(|text| {
            let cell = Cell::new(text);
            if bold {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        });
    Row::from(cells)
}

/// Render a report table as aligned text.
///
/// A blank line, the header, a separator, one line per row, a separator, and
/// the TOTAL footer. Counts are right-aligned; header and footer are bold
/// when colors are enabled.
pub fn render_table(report: &ReportTable) -> String {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    if colors_enabled() {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_header(
        report
            .headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );
    for row in &report.rows {
        table.add_row(table_row(row, false));
    }
    table.add_row(table_row(&report.footer, true));

    for index in 1..report.headers.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let rendered = table.to_string();
    let width = rendered.lines().map(measure_text_width).max().unwrap_or(0);
    let separator = "-".repeat(width);

    let mut output = String::from("\n");
    let mut lines = rendered.lines();
    if let Some(header) = lines.next() {
        output.push_str(header);
        output.push('\n');
        output.push_str(&separator);
        output.push('\n');
    }

    let body: Vec<&str> = lines.collect();
    if let Some((footer, rows)) = body.split_last() {
        for row in rows {
            output.push_str(row);
            output.push('\n');
        }
        output.push_str(&separator);
        output.push('\n');
        output.push_str(footer);
        output.push('\n');
    }

    output
}

/// Render a report table as CSV, footer last.
pub fn render_csv(table: &ReportTable) -> String {
    let mut output = table.headers.join(",");
    output.push('\n');

    for row in table.rows.iter().chain(std::iter::once(&table.footer)) {
        output.push_str(&format!("\"{}\"", row.label.replace('"', "\"\"")));
        for value in &row.values {
            output.push(',');
            output.push_str(value);
        }
        output.push('\n');
    }

    output
}
