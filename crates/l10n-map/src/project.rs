//! Row projection onto the four entry fields.

use serde::{Deserialize, Serialize};

use l10n_model::{ParsedRow, PartialMapping};

/// Rows shown in a preview when no count is given.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// One row viewed through a mapping. Unmapped or absent cells are `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedRow {
    pub key: String,
    pub source: String,
    pub target: String,
    pub status: String,
}

impl ProjectedRow {
    pub fn from_row(row: &ParsedRow, mapping: &PartialMapping) -> Self {
        Self {
            key: row.get_opt(mapping.key.as_deref()).to_string(),
            source: row.get_opt(mapping.source.as_deref()).to_string(),
            target: row.get_opt(mapping.target.as_deref()).to_string(),
            status: row.get_opt(mapping.status.as_deref()).to_string(),
        }
    }
}

/// Projects every row through a possibly incomplete mapping.
pub fn project(rows: &[ParsedRow], mapping: &PartialMapping) -> Vec<ProjectedRow> {
    rows.iter()
        .map(|row| ProjectedRow::from_row(row, mapping))
        .collect()
}

/// Projects the first `limit` rows, for showing a mapping before it is
/// confirmed.
pub fn preview(rows: &[ParsedRow], mapping: &PartialMapping, limit: usize) -> Vec<ProjectedRow> {
    project(&rows[..rows.len().min(limit)], mapping)
}
