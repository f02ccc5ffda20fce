//! Delimited export of committed entries.

use std::io::Write;

use l10n_model::EntrySet;

use crate::delimiter::Delimiter;
use crate::error::{IngestError, Result};

/// Column headers written by [`write_entries_csv`].
pub const ENTRY_EXPORT_HEADERS: [&str; 4] = ["key", "source", "target", "status"];

/// Writes `key,source,target,status` rows for every entry.
///
/// The status column holds the status display name; ids the catalog does not
/// know are written as empty cells. `Auto` exports with a comma. Only
/// single-byte delimiters are supported for output.
pub fn write_entries_csv<W: Write>(writer: W, set: &EntrySet, delimiter: &Delimiter) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(output_byte(delimiter)?)
        .from_writer(writer);
    out.write_record(ENTRY_EXPORT_HEADERS)?;
    for entry in &set.entries {
        let status = set.status_name(entry).unwrap_or("");
        out.write_record([
            entry.key.as_str(),
            entry.source.as_str(),
            entry.target.as_str(),
            status,
        ])?;
    }
    out.flush()?;
    tracing::debug!(entries = set.entries.len(), "entries exported");
    Ok(())
}

/// Resolves an output delimiter; `Auto` writes commas.
pub(crate) fn output_byte(delimiter: &Delimiter) -> Result<u8> {
    match delimiter {
        Delimiter::Auto => Ok(b','),
        Delimiter::Explicit(value) => delimiter
            .as_byte()
            .ok_or_else(|| IngestError::InvalidDelimiter(value.clone())),
    }
}

#[cfg(test)]
mod tests {
    use l10n_model::{ColumnMapping, ColumnSet, EntryId, StatusCatalog, TranslationEntry};

    use super::*;

    fn sample_set() -> EntrySet {
        let statuses = StatusCatalog::default();
        let reviewed = statuses.by_name("Reviewed").unwrap().id;
        EntrySet {
            columns: ColumnSet::from_header(&["key", "en", "ko"]).unwrap(),
            mapping: ColumnMapping::new("key", "en").with_target("ko"),
            statuses,
            entries: vec![TranslationEntry {
                id: EntryId::new_v4(),
                key: "GREET".into(),
                source: "Hello, {name}".into(),
                target: "안녕, {name}".into(),
                status_id: reviewed,
                notes: None,
            }],
        }
    }

    #[test]
    fn test_export_with_default_comma() {
        let mut buf = Vec::new();
        write_entries_csv(&mut buf, &sample_set(), &Delimiter::Auto).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "key,source,target,status\nGREET,\"Hello, {name}\",\"안녕, {name}\",Reviewed\n"
        );
    }

    #[test]
    fn test_export_with_tab() {
        let mut buf = Vec::new();
        write_entries_csv(&mut buf, &sample_set(), &Delimiter::tab()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("key\tsource\ttarget\tstatus\n"));
        assert!(text.contains("GREET\tHello, {name}\t"));
    }

    #[test]
    fn test_export_rejects_multi_character_delimiter() {
        let result = write_entries_csv(Vec::new(), &sample_set(), &Delimiter::explicit("::"));
        assert!(matches!(result, Err(IngestError::InvalidDelimiter(_))));
    }
}
