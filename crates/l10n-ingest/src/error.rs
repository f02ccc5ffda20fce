//! Error types for spreadsheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, decoding or exporting spreadsheets.
///
/// Row-level decode problems inside an otherwise readable file are not
/// errors; they are logged and skipped.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// Binary container could not be opened or its sheet could not be read.
    #[error("failed to read workbook {name}: {message}")]
    Workbook { name: String, message: String },

    /// Binary container has no worksheet.
    #[error("workbook {name} contains no sheets")]
    NoSheets { name: String },

    /// An explicit delimiter was empty or cannot be used for the operation.
    #[error("invalid delimiter {0:?}")]
    InvalidDelimiter(String),

    // === Export Errors ===
    #[error("failed to write delimited output: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // === Runtime Errors ===
    /// A blocking decode task did not complete.
    #[error("parse task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Model(#[from] l10n_model::ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
