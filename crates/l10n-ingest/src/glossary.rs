//! Glossary import and export.
//!
//! Glossary files are positional: `source`, `target` and an optional
//! `notes` column, with no header interpretation unless asked for.

use std::io::Write;

use l10n_model::GlossaryTerm;
use tracing::{debug, info};

use crate::csv::{output_byte, read_delimited};
use crate::delimiter::Delimiter;
use crate::error::Result;

/// Column headers written by [`write_glossary_csv`].
pub const GLOSSARY_EXPORT_HEADERS: [&str; 3] = ["source", "target", "notes"];

/// Reads glossary terms from delimited text.
///
/// `Auto` reads commas; glossary files are not sniffed. Blank lines are
/// dropped, and so is any row whose trimmed source or target is empty.
/// Every kept term gets a fresh id. With `skip_header` the first row is
/// discarded before any of that.
pub fn read_glossary(
    text: &str,
    delimiter: &Delimiter,
    skip_header: bool,
) -> Result<Vec<GlossaryTerm>> {
    let delimiter = match delimiter {
        Delimiter::Auto => Delimiter::explicit(","),
        explicit => explicit.clone(),
    };
    let (grid, _) = read_delimited(text, &delimiter)?;
    let body = grid.rows().iter().skip(usize::from(skip_header));

    let mut terms = Vec::new();
    let mut skipped = 0usize;
    for row in body {
        let cell = |idx: usize| row.get(idx).map(String::as_str);
        match GlossaryTerm::from_cells(
            cell(0).unwrap_or(""),
            cell(1).unwrap_or(""),
            cell(2),
        ) {
            Some(term) => terms.push(term),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, "rows without source or target skipped");
    }
    info!(terms = terms.len(), "glossary read");
    Ok(terms)
}

/// Writes `source,target,notes` rows for every term.
///
/// Missing notes are written as empty cells. Only single-byte delimiters
/// are supported for output.
pub fn write_glossary_csv<W: Write>(
    writer: W,
    terms: &[GlossaryTerm],
    delimiter: &Delimiter,
) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(output_byte(delimiter)?)
        .from_writer(writer);
    out.write_record(GLOSSARY_EXPORT_HEADERS)?;
    for term in terms {
        out.write_record([
            term.source.as_str(),
            term.target.as_str(),
            term.notes.as_deref().unwrap_or(""),
        ])?;
    }
    out.flush()?;
    debug!(terms = terms.len(), "glossary exported");
    Ok(())
}
