//! Typed localization entries produced by committing a column mapping.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mapping::ColumnMapping;
use crate::status::{StatusCatalog, StatusId};
use crate::table::ColumnSet;

/// Unique entry identifier. Fresh on every commit; not reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub id: EntryId,
    pub key: String,
    pub source: String,
    pub target: String,
    pub status_id: StatusId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A committed import: the columns it came from, the confirmed mapping,
/// the status catalog ids refer to, and the entries themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySet {
    pub columns: ColumnSet,
    pub mapping: ColumnMapping,
    pub statuses: StatusCatalog,
    pub entries: Vec<TranslationEntry>,
}

impl EntrySet {
    /// Display name of an entry's status, if the catalog knows its id.
    pub fn status_name(&self, entry: &TranslationEntry) -> Option<&str> {
        self.statuses
            .by_id(entry.status_id)
            .map(|status| status.name.as_str())
    }
}
