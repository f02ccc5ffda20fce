//! Marker and segment values produced by scanning translatable text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A format marker that must survive translation verbatim.
///
/// Equality is by exact text; no case or whitespace normalization applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Marker {
    pub text: String,
}

impl Marker {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Marker {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A contiguous chunk of scanned text: either plain text or a marker.
///
/// Concatenating the text of every segment produced for a string
/// reproduces that string exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Text { text: String },
    Marker(Marker),
}

impl Segment {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text { text: value.into() }
    }

    pub fn marker(value: impl Into<String>) -> Self {
        Self::Marker(Marker::new(value))
    }

    /// Raw text covered by this segment.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Marker(marker) => marker.as_str(),
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Self::Marker(_))
    }

    pub fn into_marker(self) -> Option<Marker> {
        match self {
            Self::Marker(marker) => Some(marker),
            Self::Text { .. } => None,
        }
    }
}
