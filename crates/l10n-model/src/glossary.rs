//! Glossary terms: preferred translations for recurring source phrases.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique term identifier. Fresh on every import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlossaryId(Uuid);

impl GlossaryId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GlossaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub id: GlossaryId,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GlossaryTerm {
    /// Builds a term from raw cells, trimming all three.
    ///
    /// Returns `None` when the source or target is blank. Blank notes are
    /// dropped.
    pub fn from_cells(source: &str, target: &str, notes: Option<&str>) -> Option<Self> {
        let source = source.trim();
        let target = target.trim();
        if source.is_empty() || target.is_empty() {
            return None;
        }
        let notes = notes
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);
        Some(Self {
            id: GlossaryId::new_v4(),
            source: source.to_string(),
            target: target.to_string(),
            notes,
        })
    }
}
