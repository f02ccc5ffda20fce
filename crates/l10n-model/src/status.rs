//! Translation workflow statuses and the catalog used to resolve them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(Uuid);

impl StatusId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationStatus {
    pub id: StatusId,
    pub name: String,
    /// Palette token (e.g. `slate`, `emerald`).
    pub color: String,
    pub order: u32,
}

/// A status definition without an id, as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSpec {
    pub name: String,
    pub color: String,
}

impl StatusSpec {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Built-in statuses; the first one is the default.
pub const DEFAULT_STATUSES: &[(&str, &str)] = &[
    ("Untranslated", "slate"),
    ("Draft", "amber"),
    ("Translated", "emerald"),
    ("Reviewed", "violet"),
];

/// The same workflow under Korean names, for sheets whose status column
/// was written in Korean.
pub const KOREAN_STATUSES: &[(&str, &str)] = &[
    ("미번역", "slate"),
    ("초벌 번역", "amber"),
    ("번역 완료", "emerald"),
    ("검수 완료", "violet"),
];

/// Ordered set of statuses. The first status is the default assigned to
/// entries whose raw status text matches no known name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TranslationStatus>", into = "Vec<TranslationStatus>")]
pub struct StatusCatalog {
    statuses: Vec<TranslationStatus>,
}

impl StatusCatalog {
    /// Builds a catalog with fresh ids, preserving the given order.
    pub fn from_specs(specs: &[StatusSpec]) -> Result<Self> {
        let statuses = specs
            .iter()
            .enumerate()
            .map(|(order, spec)| TranslationStatus {
                id: StatusId::new_v4(),
                name: spec.name.clone(),
                color: spec.color.clone(),
                order: order as u32,
            })
            .collect();
        Self::new(statuses)
    }

    /// Built-in Korean-named catalog; see [`KOREAN_STATUSES`].
    pub fn korean() -> Self {
        Self::from_pairs(KOREAN_STATUSES)
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let statuses = pairs
            .iter()
            .enumerate()
            .map(|(order, (name, color))| TranslationStatus {
                id: StatusId::new_v4(),
                name: (*name).to_string(),
                color: (*color).to_string(),
                order: order as u32,
            })
            .collect();
        Self { statuses }
    }

    pub fn new(mut statuses: Vec<TranslationStatus>) -> Result<Self> {
        if statuses.is_empty() {
            return Err(ModelError::EmptyCatalog);
        }
        if statuses.iter().any(|s| s.name.trim().is_empty()) {
            return Err(ModelError::EmptyStatusName);
        }
        statuses.sort_by_key(|s| s.order);
        Ok(Self { statuses })
    }

    pub fn default_status(&self) -> &TranslationStatus {
        &self.statuses[0]
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn by_name(&self, name: &str) -> Option<&TranslationStatus> {
        self.statuses.iter().find(|s| s.name == name)
    }

    pub fn by_id(&self, id: StatusId) -> Option<&TranslationStatus> {
        self.statuses.iter().find(|s| s.id == id)
    }

    /// Status id for raw spreadsheet text, falling back to the default.
    pub fn resolve(&self, raw: &str) -> StatusId {
        if raw.is_empty() {
            return self.default_status().id;
        }
        self.by_name(raw)
            .map_or(self.default_status().id, |status| status.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslationStatus> {
        self.statuses.iter()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_STATUSES)
    }
}

impl TryFrom<Vec<TranslationStatus>> for StatusCatalog {
    type Error = ModelError;

    fn try_from(value: Vec<TranslationStatus>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<StatusCatalog> for Vec<TranslationStatus> {
    fn from(value: StatusCatalog) -> Self {
        value.statuses
    }
}
