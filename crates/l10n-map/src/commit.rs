//! Mapping confirmation and entry materialization.

use tracing::{debug, info};

use l10n_model::{
    ColumnMapping, ColumnSet, EntryId, EntrySet, ParsedRow, PartialMapping, StatusCatalog,
    TranslationEntry,
};

use crate::error::{MappingError, Result};
use crate::project::ProjectedRow;

/// Checks a mapping against the columns of a parsed sheet.
///
/// Required columns must be distinct and every mapped column must exist.
pub fn validate_mapping(mapping: &ColumnMapping, columns: &ColumnSet) -> Result<()> {
    if mapping.key == mapping.source {
        return Err(MappingError::SameColumn {
            column: mapping.key.clone(),
        });
    }
    let fields = [
        ("key", Some(&mapping.key)),
        ("source", Some(&mapping.source)),
        ("target", mapping.target.as_ref()),
        ("status", mapping.status.as_ref()),
    ];
    for (field, column) in fields {
        if let Some(column) = column
            && !columns.contains(column)
        {
            return Err(MappingError::ColumnNotFound {
                field,
                column: column.clone(),
            });
        }
    }
    Ok(())
}

/// Turns an edited mapping into a confirmed one.
pub fn confirm_mapping(partial: PartialMapping, columns: &ColumnSet) -> Result<ColumnMapping> {
    let key = partial.key.ok_or(MappingError::MissingRequired("key"))?;
    let source = partial
        .source
        .ok_or(MappingError::MissingRequired("source"))?;
    let mapping = ColumnMapping {
        key,
        source,
        target: partial.target,
        status: partial.status,
    };
    validate_mapping(&mapping, columns)?;
    Ok(mapping)
}

/// Builds one entry per row.
///
/// Every entry gets a fresh id. Status text is matched exactly against the
/// catalog's names; unknown or unmapped status falls back to the catalog's
/// default. Rows are taken as-is, including ones with an empty key.
pub fn materialize(
    rows: &[ParsedRow],
    mapping: &ColumnMapping,
    statuses: &StatusCatalog,
) -> Vec<TranslationEntry> {
    let partial = PartialMapping::from(mapping);
    let entries: Vec<TranslationEntry> = rows
        .iter()
        .map(|row| {
            let ProjectedRow {
                key,
                source,
                target,
                status,
            } = ProjectedRow::from_row(row, &partial);
            TranslationEntry {
                id: EntryId::new_v4(),
                key,
                source,
                target,
                status_id: statuses.resolve(&status),
                notes: None,
            }
        })
        .collect();
    let defaulted = entries
        .iter()
        .filter(|entry| entry.status_id == statuses.default_status().id)
        .count();
    debug!(defaulted, "statuses resolved");
    info!(entries = entries.len(), "entries materialized");
    entries
}

/// Materializes rows and bundles them with their provenance.
pub fn build_entry_set(
    columns: ColumnSet,
    rows: &[ParsedRow],
    mapping: ColumnMapping,
    statuses: StatusCatalog,
) -> EntrySet {
    let entries = materialize(rows, &mapping, &statuses);
    EntrySet {
        columns,
        mapping,
        statuses,
        entries,
    }
}
