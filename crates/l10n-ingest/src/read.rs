//! Asynchronous file reading and last-request-wins parse tracking.
//!
//! Reading the file is the only suspension point; decoding runs on the
//! blocking pool once the bytes are in memory. When a user re-parses the same
//! file (say, after picking another delimiter) while an earlier parse is
//! still running, only the most recently issued request may be applied.
//! [`ParseTracker`] enforces that by request identity, not completion order.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::sheet::{ParseOptions, ParsedSheet, SpreadsheetFile, parse_spreadsheet};

/// Reads a file from disk, keeping its file name for format dispatch.
pub async fn load_spreadsheet(path: &Path) -> Result<SpreadsheetFile> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!(file = %name, bytes = bytes.len(), "file loaded");
    Ok(SpreadsheetFile::new(name, bytes))
}

/// Reads and parses a spreadsheet.
pub async fn read_spreadsheet(path: &Path, options: ParseOptions) -> Result<ParsedSheet> {
    let file = load_spreadsheet(path).await?;
    tokio::task::spawn_blocking(move || parse_spreadsheet(&file, &options)).await?
}

/// Identity of one parse request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParseTicket(u64);

impl ParseTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tickets and admits only the latest.
///
/// Use one tracker per file being edited.
#[derive(Debug, Default)]
pub struct ParseTracker {
    latest: AtomicU64,
}

impl ParseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket.
    pub fn issue(&self) -> ParseTicket {
        ParseTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// The most recently issued ticket, if any.
    pub fn latest(&self) -> Option<ParseTicket> {
        match self.latest.load(Ordering::Acquire) {
            0 => None,
            id => Some(ParseTicket(id)),
        }
    }

    pub fn is_current(&self, ticket: ParseTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Returns `result` if `ticket` is still the latest request; drops it
    /// otherwise.
    pub fn accept<T>(&self, ticket: ParseTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            warn!(
                ticket = ticket.0,
                latest = self.latest.load(Ordering::Acquire),
                "discarding superseded parse result"
            );
            None
        }
    }

    /// Issues a ticket, reads and parses `path`, and returns the outcome
    /// only if no newer request was issued meanwhile.
    pub async fn run(&self, path: &Path, options: ParseOptions) -> Option<Result<ParsedSheet>> {
        let ticket = self.issue();
        let result = read_spreadsheet(path, options).await;
        self.accept(ticket, result)
    }
}
