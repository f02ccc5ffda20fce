//! Spreadsheet ingestion for translation tables.
//!
//! Files are dispatched by name or media type: delimited text goes through
//! [`csv`] (with delimiter detection when none is given), anything else is
//! opened as a binary workbook and its first sheet is read. Either way the
//! result is a [`RawGrid`] which [`build_sheet`] turns into named rows,
//! taking row 0 as the header when [`is_header_row`] says it looks like one.
//!
//! Glossary files take a simpler path through [`read_glossary`]: fixed
//! positional columns, no sniffing, no header unless asked for.
//!
//! [`ParseTracker`] keeps overlapping re-parses of one file from applying
//! stale results.

pub mod csv;
pub mod delimiter;
pub mod error;
pub mod glossary;
pub mod grid;
pub mod header;
pub mod read;
pub mod sheet;
pub mod workbook;

pub use csv::{ENTRY_EXPORT_HEADERS, decode_text, write_entries_csv};
pub use delimiter::{DEFAULT_DELIMITER, DETECTION_CANDIDATES, Delimiter, detect_delimiter};
pub use error::{IngestError, Result};
pub use glossary::{GLOSSARY_EXPORT_HEADERS, read_glossary, write_glossary_csv};
pub use grid::RawGrid;
pub use header::is_header_row;
pub use read::{ParseTicket, ParseTracker, load_spreadsheet, read_spreadsheet};
pub use sheet::{
    CSV_MEDIA_TYPE, ParseOptions, ParsedSheet, SheetKind, SpreadsheetFile, build_sheet,
    parse_spreadsheet,
};
pub use workbook::read_first_sheet;
