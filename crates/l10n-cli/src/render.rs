//! Table and text rendering for command output.

use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use l10n_ingest::ParsedSheet;
use l10n_map::ProjectedRow;
use l10n_model::{GlossaryTerm, Marker, Segment};
use l10n_tokens::{MarkerReport, missing_markers, tokenize};

/// Column names with the first row's value as a sample.
pub fn columns_table(sheet: &ParsedSheet) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column"), header_cell("Sample")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    let first = sheet.rows.first();
    for (idx, name) in sheet.columns.iter().enumerate() {
        let sample = first.map_or("", |row| row.get(name));
        table.add_row(vec![Cell::new(idx + 1), Cell::new(name), text_cell(sample)]);
    }
    table
}

/// The first `limit` rows under their column names.
pub fn rows_table(sheet: &ParsedSheet, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(sheet.columns.iter().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in sheet.rows.iter().take(limit) {
        table.add_row(
            sheet
                .columns
                .iter()
                .map(|name| text_cell(row.get(name)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Mapped rows with the markers each translation is missing.
pub fn mapping_table(rows: &[ProjectedRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Source"),
        header_cell("Target"),
        header_cell("Status"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    for row in rows {
        let missing = if row.target.is_empty() {
            Vec::new()
        } else {
            missing_markers(&row.source, &row.target)
        };
        table.add_row(vec![
            Cell::new(&row.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            text_cell(&row.source),
            text_cell(&row.target),
            text_cell(&row.status),
            missing_cell(&missing),
        ]);
    }
    table
}

/// One row per entry with missing markers.
pub fn issues_table(report: &MarkerReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Missing"),
        header_cell("Count"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in &report.issues {
        table.add_row(vec![
            Cell::new(&issue.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            missing_cell(&issue.missing),
            Cell::new(issue.missing.len())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// Imported glossary terms.
pub fn glossary_table(terms: &[GlossaryTerm]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Target"),
        header_cell("Notes"),
    ]);
    apply_summary_table_style(&mut table);
    for term in terms {
        table.add_row(vec![
            Cell::new(&term.source)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            text_cell(&term.target),
            text_cell(term.notes.as_deref().unwrap_or("")),
        ]);
    }
    table
}

/// Plain-text breakdown of a source string and what its translation lacks.
pub fn check_report(source: &str, target: &str) -> String {
    let mut out = String::new();
    for segment in tokenize(source) {
        let _ = match &segment {
            Segment::Text { text } => writeln!(out, "  text   {text:?}"),
            Segment::Marker(marker) => writeln!(out, "  marker {:?}", marker.as_str()),
        };
    }
    let missing = missing_markers(source, target);
    if missing.is_empty() {
        out.push_str("all markers present\n");
    } else {
        let _ = writeln!(out, "missing {}: {}", missing.len(), join_markers(&missing));
    }
    out
}

pub fn join_markers(markers: &[Marker]) -> String {
    markers
        .iter()
        .map(Marker::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn missing_cell(missing: &[Marker]) -> Cell {
    if missing.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(join_markers(missing)).fg(Color::Red)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
