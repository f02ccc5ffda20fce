//! Delimiter selection for delimited text.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Candidates tried by automatic detection, in preference order.
pub const DETECTION_CANDIDATES: [u8; 6] = [b',', b'\t', b'|', b';', 0x1e, 0x1f];

/// Delimiter used when detection finds no convincing candidate.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Records sampled per candidate during detection.
pub const DETECTION_PREVIEW_RECORDS: usize = 10;

/// How to split delimited text into cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Detect from the content.
    #[default]
    Auto,
    /// Use this exact string; may be longer than one character.
    Explicit(String),
}

impl Delimiter {
    pub fn explicit(value: impl Into<String>) -> Self {
        Self::Explicit(value.into())
    }

    pub fn tab() -> Self {
        Self::Explicit("\t".to_string())
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The delimiter as a single byte, when it is one.
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Self::Explicit(value) if value.len() == 1 => value.as_bytes().first().copied(),
            _ => None,
        }
    }
}

impl FromStr for Delimiter {
    type Err = Infallible;

    /// `auto` and the empty string select detection. `\t` (backslash, t)
    /// and `tab` select a literal tab. Anything else is taken verbatim.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "" | "auto" => Self::Auto,
            "\\t" | "tab" => Self::tab(),
            other => Self::Explicit(other.to_string()),
        })
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Explicit(value) if value == "\t" => f.write_str("\\t"),
            Self::Explicit(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CandidateScore {
    delta: usize,
    avg_field_count: f64,
}

fn score_candidate(text: &str, delimiter: u8) -> CandidateScore {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let mut delta = 0usize;
    let mut total_fields = 0usize;
    let mut rows = 0usize;
    let mut previous: Option<usize> = None;
    for record in reader
        .records()
        .take(DETECTION_PREVIEW_RECORDS)
        .filter_map(std::result::Result::ok)
    {
        let count = record.len();
        rows += 1;
        total_fields += count;
        match previous {
            None => previous = Some(count),
            Some(prev) if count > 0 => {
                delta += count.abs_diff(prev);
                previous = Some(count);
            }
            Some(_) => {}
        }
    }
    let avg_field_count = if rows == 0 {
        0.0
    } else {
        total_fields as f64 / rows as f64
    };
    CandidateScore {
        delta,
        avg_field_count,
    }
}

/// Picks the candidate whose first records have the most consistent
/// field counts.
///
/// A candidate must average more than 1.99 fields per record. Among those,
/// a later candidate replaces the current best only if its field-count
/// delta is no larger and its average field count is strictly higher.
/// Falls back to [`DEFAULT_DELIMITER`].
pub fn detect_delimiter(text: &str) -> u8 {
    let mut best: Option<(u8, CandidateScore)> = None;
    for candidate in DETECTION_CANDIDATES {
        let score = score_candidate(text, candidate);
        if score.avg_field_count <= 1.99 {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, current)) => {
                score.delta <= current.delta && score.avg_field_count > current.avg_field_count
            }
        };
        if better {
            best = Some((candidate, score));
        }
    }
    let chosen = best.map_or(DEFAULT_DELIMITER, |(delimiter, _)| delimiter);
    let shown = (chosen as char).escape_default().to_string();
    tracing::debug!(
        delimiter = %shown,
        detected = best.is_some(),
        "delimiter selected"
    );
    chosen
}
