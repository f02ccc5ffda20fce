use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("column name must not be empty")]
    EmptyColumnName,
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("status name must not be empty")]
    EmptyStatusName,
    #[error("status catalog must contain at least one status")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, ModelError>;
