//! Library components of the `l10n` command-line tool.

pub mod logging;
pub mod render;
