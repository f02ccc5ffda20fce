//! Marker audit across committed entries.

use serde::Serialize;
use tracing::debug;

use l10n_model::{EntryId, Marker, TranslationEntry};

use crate::diff::missing_markers;

/// An entry whose translation lost at least one source marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerIssue {
    pub entry_id: EntryId,
    pub key: String,
    pub missing: Vec<Marker>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkerReport {
    /// Entries with a non-empty target that were compared.
    pub checked: usize,
    /// Entries skipped because they have no translation yet.
    pub untranslated: usize,
    pub issues: Vec<MarkerIssue>,
}

impl MarkerReport {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn missing_count(&self) -> usize {
        self.issues.iter().map(|issue| issue.missing.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Compares source and target markers of every translated entry.
pub fn audit_entries(entries: &[TranslationEntry]) -> MarkerReport {
    let mut report = MarkerReport::default();
    for entry in entries {
        if entry.target.is_empty() {
            report.untranslated += 1;
            continue;
        }
        report.checked += 1;
        let missing = missing_markers(&entry.source, &entry.target);
        if missing.is_empty() {
            continue;
        }
        debug!(key = %entry.key, missing = missing.len(), "entry is missing markers");
        report.issues.push(MarkerIssue {
            entry_id: entry.id,
            key: entry.key.clone(),
            missing,
        });
    }
    report
}
