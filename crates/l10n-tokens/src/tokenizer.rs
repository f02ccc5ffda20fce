//! Left-to-right, non-overlapping marker scanning.

use std::ops::Range;

use l10n_model::{Marker, Segment};

use crate::grammar::{MarkerKind, match_marker};

/// A marker found in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'a> {
    pub kind: MarkerKind,
    pub start: usize,
    pub text: &'a str,
}

impl MarkerMatch<'_> {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    pub fn to_marker(&self) -> Marker {
        Marker::new(self.text)
    }
}

/// Iterator over the markers of a string, in occurrence order.
///
/// Scanning resumes right after each consumed marker, so matches never
/// overlap.
#[derive(Debug, Clone)]
pub struct MarkerMatches<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> MarkerMatches<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for MarkerMatches<'a> {
    type Item = MarkerMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            if let Some((kind, len)) = match_marker(rest) {
                let start = self.pos;
                self.pos += len;
                return Some(MarkerMatch {
                    kind,
                    start,
                    text: &rest[..len],
                });
            }
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}

/// Lazy segment sequence covering a string with no gaps.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
    matches: MarkerMatches<'a>,
    pending: Option<MarkerMatch<'a>>,
}

impl<'a> Segments<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            matches: MarkerMatches::new(text),
            pending: None,
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(marker) = self.pending.take() {
            self.pos = marker.range().end;
            return Some(Segment::marker(marker.text));
        }
        match self.matches.next() {
            Some(marker) if marker.start > self.pos => {
                let text = &self.text[self.pos..marker.start];
                self.pos = marker.start;
                self.pending = Some(marker);
                Some(Segment::text(text))
            }
            Some(marker) => {
                self.pos = marker.range().end;
                Some(Segment::marker(marker.text))
            }
            None if self.pos < self.text.len() => {
                let text = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Segment::text(text))
            }
            None => None,
        }
    }
}

/// Splits `text` into alternating text and marker segments.
///
/// Concatenating the segments reproduces `text`; an empty string yields
/// no segments.
pub fn tokenize(text: &str) -> Segments<'_> {
    Segments::new(text)
}

/// Markers of `text` in occurrence order, duplicates preserved.
pub fn extract_markers(text: &str) -> Vec<Marker> {
    MarkerMatches::new(text)
        .map(|m| m.to_marker())
        .collect()
}

/// Borrowing variant of [`extract_markers`].
pub fn marker_matches(text: &str) -> MarkerMatches<'_> {
    MarkerMatches::new(text)
}
