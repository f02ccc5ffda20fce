//! Association between semantic entry fields and ingested column names.

use serde::{Deserialize, Serialize};

/// A confirmed column mapping.
///
/// `key` and `source` are always present; `target` and `status` are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub key: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ColumnMapping {
    pub fn new(key: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            source: source.into(),
            target: None,
            status: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, column: impl Into<String>) -> Self {
        self.target = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, column: impl Into<String>) -> Self {
        self.status = Some(column.into());
        self
    }
}

/// A mapping still being edited; any field may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialMapping {
    pub key: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub status: Option<String>,
}

impl PartialMapping {
    /// True once the required `key` and `source` columns are chosen.
    pub fn is_complete(&self) -> bool {
        self.key.is_some() && self.source.is_some()
    }
}

impl From<ColumnMapping> for PartialMapping {
    fn from(value: ColumnMapping) -> Self {
        Self {
            key: Some(value.key),
            source: Some(value.source),
            target: value.target,
            status: value.status,
        }
    }
}

impl From<&ColumnMapping> for PartialMapping {
    fn from(value: &ColumnMapping) -> Self {
        Self::from(value.clone())
    }
}
