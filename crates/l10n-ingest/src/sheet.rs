//! Spreadsheet parsing: dispatch, header inference and row projection.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use l10n_model::{ColumnSet, ParsedRow};

use crate::csv::{decode_text, read_delimited};
use crate::delimiter::Delimiter;
use crate::error::Result;
use crate::grid::RawGrid;
use crate::header::is_header_row;
use crate::workbook::read_first_sheet;

/// Media type that marks a file as delimited text.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// How a file's bytes are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKind {
    /// Delimited text (CSV and friends).
    Delimited,
    /// Binary workbook; only the first sheet is read.
    Workbook,
}

impl SheetKind {
    /// `.csv` names (any case) and `text/csv` media types are delimited
    /// text; everything else is treated as a workbook.
    pub fn detect(name: &str, media_type: Option<&str>) -> Self {
        let is_csv_name = name.to_lowercase().ends_with(".csv");
        let is_csv_type = media_type.is_some_and(|t| t.eq_ignore_ascii_case(CSV_MEDIA_TYPE));
        if is_csv_name || is_csv_type {
            Self::Delimited
        } else {
            Self::Workbook
        }
    }
}

/// File contents plus the metadata used to pick a decoder.
#[derive(Debug, Clone)]
pub struct SpreadsheetFile {
    pub name: String,
    pub media_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SpreadsheetFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            media_type: None,
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn kind(&self) -> SheetKind {
        SheetKind::detect(&self.name, self.media_type.as_deref())
    }
}

/// Parser options. Delimiters only apply to delimited text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub delimiter: Delimiter,
}

impl ParseOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Result of parsing a spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSheet {
    pub columns: ColumnSet,
    pub rows: Vec<ParsedRow>,
    /// True when row 0 was taken as the header.
    pub has_header: bool,
    /// Delimiter actually used for delimited text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl ParsedSheet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}

/// Interprets a raw grid: infers the header from row 0 and projects the
/// data rows onto the resulting columns.
///
/// With a header, columns come from row 0 and data starts at row 1.
/// Otherwise columns are `Column 1..=max width` and every row is data.
/// Rows are never dropped; short rows are padded with empty cells.
pub fn build_sheet(grid: &RawGrid) -> Result<ParsedSheet> {
    let Some(first) = grid.first_row() else {
        return Ok(ParsedSheet::default());
    };
    let has_header = is_header_row(first);
    let (columns, data) = if has_header {
        (ColumnSet::from_header(first)?, &grid.rows()[1..])
    } else {
        (ColumnSet::synthetic(grid.max_width()), grid.rows())
    };
    debug!(
        has_header,
        columns = columns.len(),
        max_width = grid.max_width(),
        "header inferred"
    );
    let rows = data
        .iter()
        .map(|cells| ParsedRow::from_cells(&columns, cells))
        .collect();
    Ok(ParsedSheet {
        columns,
        rows,
        has_header,
        delimiter: None,
    })
}

/// Parses a spreadsheet file into named rows.
///
/// Delimited text is split with `options.delimiter` (detected when `Auto`);
/// workbooks contribute their first sheet. An empty file yields an empty
/// sheet, not an error.
pub fn parse_spreadsheet(file: &SpreadsheetFile, options: &ParseOptions) -> Result<ParsedSheet> {
    let kind = file.kind();
    let span = info_span!("parse_spreadsheet", file = %file.name, ?kind);
    let _guard = span.enter();
    let start = Instant::now();

    let (grid, delimiter) = match kind {
        SheetKind::Delimited => {
            let text = decode_text(&file.bytes);
            let (grid, used) = read_delimited(&text, &options.delimiter)?;
            (grid, Some(used))
        }
        SheetKind::Workbook => (read_first_sheet(&file.name, &file.bytes)?, None),
    };

    let mut sheet = build_sheet(&grid)?;
    if !sheet.is_empty() {
        sheet.delimiter = delimiter;
    }
    info!(
        rows = sheet.rows.len(),
        columns = sheet.columns.len(),
        has_header = sheet.has_header,
        duration_ms = start.elapsed().as_millis(),
        "parse complete"
    );
    Ok(sheet)
}
