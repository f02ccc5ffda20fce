//! Error types for mapping operations.

use thiserror::Error;

/// Errors from mapping validation.
///
/// Projection and materialization never fail; these only gate a commit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A required field (`key` or `source`) has no column.
    #[error("no column selected for required field '{0}'")]
    MissingRequired(&'static str),

    /// `key` and `source` point at the same column.
    #[error("column '{column}' cannot be both key and source")]
    SameColumn { column: String },

    /// A mapped column does not exist in the parsed sheet.
    #[error("column '{column}' mapped to '{field}' not found")]
    ColumnNotFound { field: &'static str, column: String },
}

pub type Result<T> = std::result::Result<T, MappingError>;
