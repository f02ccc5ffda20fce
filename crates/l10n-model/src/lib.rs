//! Data model shared by the localization ingestion and marker-checking crates.

pub mod entry;
pub mod error;
pub mod glossary;
pub mod mapping;
pub mod marker;
pub mod status;
pub mod table;

pub use entry::{EntryId, EntrySet, TranslationEntry};
pub use error::{ModelError, Result};
pub use glossary::{GlossaryId, GlossaryTerm};
pub use mapping::{ColumnMapping, PartialMapping};
pub use marker::{Marker, Segment};
pub use status::{
    DEFAULT_STATUSES, KOREAN_STATUSES, StatusCatalog, StatusId, StatusSpec, TranslationStatus,
};
pub use table::{ColumnSet, ParsedRow, synthetic_column_name};
