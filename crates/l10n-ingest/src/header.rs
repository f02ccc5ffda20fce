//! Header row inference.

use std::collections::HashSet;

/// Returns true when `cells` looks like a header row.
///
/// A header row is non-empty, has no cell that is blank after trimming, and
/// its trimmed cells are pairwise distinct. Cell types are not considered:
/// a row of numbers still qualifies.
///
/// A genuine header that repeats a name (two `Notes` columns) is rejected
/// and the row is treated as data.
pub fn is_header_row<S: AsRef<str>>(cells: &[S]) -> bool {
    if cells.is_empty() {
        return false;
    }
    let mut seen = HashSet::with_capacity(cells.len());
    cells.iter().all(|cell| {
        let trimmed = cell.as_ref().trim();
        !trimmed.is_empty() && seen.insert(trimmed)
    })
}
