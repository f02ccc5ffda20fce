//! Column sets and named rows produced by tabular ingestion.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Synthetic name for a 0-based column index (`Column 1`, `Column 2`, ...).
pub fn synthetic_column_name(index: usize) -> String {
    format!("Column {}", index + 1)
}

/// Ordered, unique column names; one per grid column index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ColumnSet(Vec<String>);

impl ColumnSet {
    /// Builds a column set, rejecting empty or duplicate names.
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for name in &names {
            if name.is_empty() {
                return Err(ModelError::EmptyColumnName);
            }
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self(names))
    }

    /// `Column 1..=count`.
    pub fn synthetic(count: usize) -> Self {
        Self((0..count).map(synthetic_column_name).collect())
    }

    /// Column names taken from a header row: trimmed, with blank cells
    /// replaced by their synthetic name.
    pub fn from_header<S: AsRef<str>>(cells: &[S]) -> Result<Self> {
        let names = cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let trimmed = cell.as_ref().trim();
                if trimmed.is_empty() {
                    synthetic_column_name(idx)
                } else {
                    trimmed.to_string()
                }
            })
            .collect();
        Self::new(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|c| c == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for ColumnSet {
    type Error = ModelError;

    fn try_from(value: Vec<String>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ColumnSet> for Vec<String> {
    fn from(value: ColumnSet) -> Self {
        value.0
    }
}

/// One data row keyed by column name.
///
/// Every column of the originating [`ColumnSet`] has an entry; cells the
/// source row did not have are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedRow {
    cells: BTreeMap<String, String>,
}

impl ParsedRow {
    /// Projects raw cells onto `columns` by position.
    ///
    /// Short rows are padded with empty strings; cells past the last column
    /// are ignored.
    pub fn from_cells<S: AsRef<str>>(columns: &ColumnSet, cells: &[S]) -> Self {
        let cells = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let value = cells.get(idx).map(AsRef::as_ref).unwrap_or("");
                (name.to_string(), value.to_string())
            })
            .collect();
        Self { cells }
    }

    /// Cell value for `column`, or `""` when the row has no such column.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    /// Like [`ParsedRow::get`] but treats an absent column name as empty.
    pub fn get_opt(&self, column: Option<&str>) -> &str {
        column.map(|c| self.get(c)).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_names_are_one_based() {
        let columns = ColumnSet::synthetic(3);
        assert_eq!(columns.as_slice(), ["Column 1", "Column 2", "Column 3"]);
    }

    #[test]
    fn test_header_cells_are_trimmed() {
        let columns = ColumnSet::from_header(&[" key ", "en", "\tko"]).unwrap();
        assert_eq!(columns.as_slice(), ["key", "en", "ko"]);
    }

    #[test]
    fn test_blank_header_cell_gets_synthetic_name() {
        let columns = ColumnSet::from_header(&["key", "  ", "ko"]).unwrap();
        assert_eq!(columns.as_slice(), ["key", "Column 2", "ko"]);
    }

    #[test]
    fn test_duplicate_columns_are_rejected() {
        let err = ColumnSet::new(vec!["a".into(), "a".into()]).unwrap_err();
        assert_eq!(err, ModelError::DuplicateColumn("a".into()));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let columns = ColumnSet::synthetic(3);
        let row = ParsedRow::from_cells(&columns, &["x"]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.get("Column 1"), "x");
        assert_eq!(row.get("Column 3"), "");
    }

    #[test]
    fn test_long_rows_are_truncated() {
        let columns = ColumnSet::synthetic(1);
        let row = ParsedRow::from_cells(&columns, &["x", "y"]);
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("Column 2"), "");
    }

    #[test]
    fn test_missing_column_reads_as_empty() {
        let row = ParsedRow::default();
        assert_eq!(row.get("nope"), "");
        assert_eq!(row.get_opt(None), "");
    }
}
