//! Delimited text decoding into a raw grid.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::delimiter::{Delimiter, detect_delimiter};
use crate::error::{IngestError, Result};
use crate::grid::RawGrid;

use super::split::split_delimited;

/// Decodes file bytes as UTF-8, dropping a leading BOM and replacing
/// malformed sequences.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        warn!("input is not valid UTF-8; malformed sequences were replaced");
    }
    text
}

/// Splits delimited text into a raw grid.
///
/// Returns the grid together with the delimiter actually used, which is the
/// detected one when `delimiter` is [`Delimiter::Auto`]. Blank lines are
/// dropped rather than kept as empty rows, so they never reach header
/// detection or the row count. Records the reader cannot decode are skipped
/// with a warning.
pub fn read_delimited(text: &str, delimiter: &Delimiter) -> Result<(RawGrid, String)> {
    let byte = match delimiter {
        Delimiter::Auto => detect_delimiter(text),
        Delimiter::Explicit(value) if value.is_empty() => {
            return Err(IngestError::InvalidDelimiter(value.clone()));
        }
        Delimiter::Explicit(value) => match delimiter.as_byte() {
            Some(byte) => byte,
            None => {
                debug!(delimiter = %value, "using multi-character delimiter");
                let grid = RawGrid::new(split_delimited(text, value));
                return Ok((grid, value.clone()));
            }
        },
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(byte)
        .from_reader(text.as_bytes());
    let mut grid = RawGrid::default();
    for (idx, record) in reader.records().enumerate() {
        match record {
            Ok(record) => grid.push(record.iter().map(str::to_string).collect()),
            Err(error) => warn!(record = idx + 1, %error, "skipping undecodable record"),
        }
    }
    Ok((grid, (byte as char).to_string()))
}
