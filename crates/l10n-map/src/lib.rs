//! Mapping parsed rows onto translation entries.
//!
//! While a mapping is being edited, [`preview`] shows how the first rows
//! would be read. Once [`confirm_mapping`] accepts it, [`materialize`]
//! turns every row into a [`TranslationEntry`](l10n_model::TranslationEntry).

pub mod commit;
pub mod error;
pub mod project;

pub use commit::{build_entry_set, confirm_mapping, materialize, validate_mapping};
pub use error::{MappingError, Result};
pub use project::{DEFAULT_PREVIEW_ROWS, ProjectedRow, preview, project};
