//! Marker grammar.
//!
//! Seven marker classes, tried in a fixed order at each scan position. The
//! first class that matches at a position wins; there is no
//! leftmost-longest selection across classes.
//!
//! | Order | Class              | Shape                         |
//! |-------|--------------------|-------------------------------|
//! | 1     | brace interpolation | `{` non-`}`+ `}`             |
//! | 2     | angle markup       | `<` non-`>`+ `>`              |
//! | 3     | square markup      | `[` non-`]`+ `]`              |
//! | 4     | positional printf  | `%` digit+ `$` one of `sdif`  |
//! | 5     | printf             | `%` one of `sdif`             |
//! | 6     | shell variable     | `$` word+                     |
//! | 7     | entity reference   | `&` word+ `;`                 |
//!
//! "Word" is ASCII `[A-Za-z0-9_]`. Enclosed classes may contain newlines.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Brace,
    AngleTag,
    SquareTag,
    PositionalPrintf,
    Printf,
    ShellVariable,
    Entity,
}

/// Marker classes in match priority order.
pub const GRAMMAR: [MarkerKind; 7] = [
    MarkerKind::Brace,
    MarkerKind::AngleTag,
    MarkerKind::SquareTag,
    MarkerKind::PositionalPrintf,
    MarkerKind::Printf,
    MarkerKind::ShellVariable,
    MarkerKind::Entity,
];

const PRINTF_CONVERSIONS: &[u8] = b"sdif";

impl MarkerKind {
    /// Byte length of this marker class matched at the very start of
    /// `input`, if it matches there.
    pub fn match_len(self, input: &str) -> Option<usize> {
        let bytes = input.as_bytes();
        match self {
            Self::Brace => enclosed(bytes, b'{', b'}'),
            Self::AngleTag => enclosed(bytes, b'<', b'>'),
            Self::SquareTag => enclosed(bytes, b'[', b']'),
            Self::PositionalPrintf => positional_printf(bytes),
            Self::Printf => match bytes {
                [b'%', conv, ..] if PRINTF_CONVERSIONS.contains(conv) => Some(2),
                _ => None,
            },
            Self::ShellVariable => match bytes.split_first() {
                Some((b'$', rest)) => non_zero(word_len(rest)).map(|n| n + 1),
                _ => None,
            },
            Self::Entity => match bytes.split_first() {
                Some((b'&', rest)) => {
                    let n = non_zero(word_len(rest))?;
                    (rest.get(n) == Some(&b';')).then_some(n + 2)
                }
                _ => None,
            },
        }
    }

    /// Whether a marker of any class can start with this byte.
    pub fn can_start(byte: u8) -> bool {
        matches!(byte, b'{' | b'<' | b'[' | b'%' | b'$' | b'&')
    }
}

/// First marker class matching at the start of `input`, with its length.
pub fn match_marker(input: &str) -> Option<(MarkerKind, usize)> {
    let first = *input.as_bytes().first()?;
    if !MarkerKind::can_start(first) {
        return None;
    }
    GRAMMAR
        .iter()
        .find_map(|kind| kind.match_len(input).map(|len| (*kind, len)))
}

fn enclosed(bytes: &[u8], open: u8, close: u8) -> Option<usize> {
    let (first, rest) = bytes.split_first()?;
    if *first != open {
        return None;
    }
    let end = rest.iter().position(|b| *b == close)?;
    non_zero(end).map(|n| n + 2)
}

fn positional_printf(bytes: &[u8]) -> Option<usize> {
    let (first, rest) = bytes.split_first()?;
    if *first != b'%' {
        return None;
    }
    let digits = non_zero(rest.iter().take_while(|b| b.is_ascii_digit()).count())?;
    match &rest[digits..] {
        [b'$', conv, ..] if PRINTF_CONVERSIONS.contains(conv) => Some(digits + 3),
        _ => None,
    }
}

fn word_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}

fn non_zero(n: usize) -> Option<usize> {
    (n > 0).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(input: &str) -> Option<(MarkerKind, &str)> {
        match_marker(input).map(|(kind, len)| (kind, &input[..len]))
    }

    #[test]
    fn test_brace_requires_content() {
        assert_eq!(matched("{name} x"), Some((MarkerKind::Brace, "{name}")));
        assert_eq!(matched("{}"), None);
        assert_eq!(matched("{open"), None);
    }

    #[test]
    fn test_brace_stops_at_first_close() {
        assert_eq!(matched("{{x}}"), Some((MarkerKind::Brace, "{{x}")));
    }

    #[test]
    fn test_markup_tags() {
        assert_eq!(matched("<b>bold"), Some((MarkerKind::AngleTag, "<b>")));
        assert_eq!(matched("</b>"), Some((MarkerKind::AngleTag, "</b>")));
        assert_eq!(matched("[color=red]"), Some((MarkerKind::SquareTag, "[color=red]")));
        assert_eq!(matched("<>"), None);
        assert_eq!(matched("[]"), None);
    }

    #[test]
    fn test_printf_specifiers() {
        assert_eq!(matched("%s"), Some((MarkerKind::Printf, "%s")));
        assert_eq!(matched("%d items"), Some((MarkerKind::Printf, "%d")));
        assert_eq!(matched("%1$s"), Some((MarkerKind::PositionalPrintf, "%1$s")));
        assert_eq!(matched("%12$f"), Some((MarkerKind::PositionalPrintf, "%12$f")));
        assert_eq!(matched("%x"), None);
        assert_eq!(matched("%1$x"), None);
        assert_eq!(matched("%"), None);
    }

    #[test]
    fn test_shell_variables_are_greedy() {
        assert_eq!(matched("$player_1!"), Some((MarkerKind::ShellVariable, "$player_1")));
        assert_eq!(matched("$ 5"), None);
    }

    #[test]
    fn test_entities_need_semicolon() {
        assert_eq!(matched("&amp; more"), Some((MarkerKind::Entity, "&amp;")));
        assert_eq!(matched("&amp more"), None);
        assert_eq!(matched("&;"), None);
    }

    #[test]
    fn test_enclosed_markers_may_span_lines() {
        assert_eq!(matched("{a\nb}"), Some((MarkerKind::Brace, "{a\nb}")));
    }

    #[test]
    fn test_non_ascii_content_is_kept_whole() {
        assert_eq!(matched("{이름}님"), Some((MarkerKind::Brace, "{이름}")));
    }
}
