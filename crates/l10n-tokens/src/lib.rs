//! Format-marker handling for translatable strings.
//!
//! Markers are placeholders, markup tags, printf specifiers and entity
//! references that must appear in a translation exactly as often as in its
//! source. This crate scans strings into markers ([`tokenize`],
//! [`extract_markers`]), compares marker bags ([`find_missing`]) and audits
//! whole entry lists ([`audit_entries`]).
//!
//! ```
//! use l10n_tokens::{extract_markers, find_missing};
//!
//! let source = extract_markers("Hello {name}, you have %d messages");
//! let target = extract_markers("{name}님, 메시지가 있습니다");
//! let missing = find_missing(&source, &target);
//! assert_eq!(missing.len(), 1);
//! assert_eq!(missing[0].text, "%d");
//! ```

pub mod audit;
pub mod diff;
pub mod grammar;
pub mod tokenizer;

pub use audit::{MarkerIssue, MarkerReport, audit_entries};
pub use diff::{find_missing, missing_markers};
pub use grammar::{GRAMMAR, MarkerKind, match_marker};
pub use tokenizer::{
    MarkerMatch, MarkerMatches, Segments, extract_markers, marker_matches, tokenize,
};
