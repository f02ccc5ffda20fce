//! Multiset comparison of source and target markers.

use std::collections::HashMap;

use l10n_model::Marker;

use crate::tokenizer::marker_matches;

/// Source markers with no matching occurrence in `target`.
///
/// Bag difference: each target marker consumes at most one equal source
/// marker, so two `{x}` in the source against one in the target leaves one
/// `{x}` missing. Comparison is byte-exact. The result follows source order.
pub fn find_missing(source: &[Marker], target: &[Marker]) -> Vec<Marker> {
    let mut available: HashMap<&str, usize> = HashMap::new();
    for marker in target {
        *available.entry(marker.as_str()).or_default() += 1;
    }
    let mut missing = Vec::new();
    for marker in source {
        match available.get_mut(marker.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => missing.push(marker.clone()),
        }
    }
    missing
}

/// [`find_missing`] over the markers scanned from two strings.
pub fn missing_markers(source: &str, target: &str) -> Vec<Marker> {
    let mut available: HashMap<&str, usize> = HashMap::new();
    for found in marker_matches(target) {
        *available.entry(found.text).or_default() += 1;
    }
    marker_matches(source)
        .filter(|found| match available.get_mut(found.text) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .map(|found| found.to_marker())
        .collect()
}
