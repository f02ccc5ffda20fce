//! Delimited text reading and writing.

mod reader;
mod split;
mod writer;

pub use reader::{decode_text, read_delimited};
pub use split::split_delimited;
pub use writer::{ENTRY_EXPORT_HEADERS, write_entries_csv};

pub(crate) use writer::output_byte;
