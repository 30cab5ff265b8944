//! Line normalizer — strips logging-framework decoration from raw log lines.
//!
//! Two decoration shapes are recognised, tried in this order:
//!
//! ```text
//! full:          [stdlog] 2026-01-14 21:12:20,986 avocado.test INFO | <payload>
//! continuation:  [stdlog]     "read_bw": 2165.8,
//! ```
//!
//! Decoration can nest (a test logging another test's log), so prefixes are
//! stripped until neither shape matches. Anything else is already plain and
//! is only trimmed. Normalisation borrows from the input and never fails.

use std::sync::LazyLock;

use regex::Regex;

static FULL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[stdlog\]\s+\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2},\d+\s+[^|]+\|")
        .expect("valid regex")
});

static CONTINUATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[stdlog\](?:\s+|$)").expect("valid regex"));

/// Outermost decoration, if any, a raw line carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    None,
    Full,
    Continuation,
}

/// A single line of log text split into its decoration and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLogLine<'a> {
    pub raw: &'a str,
    pub decoration: Decoration,
    pub payload: &'a str,
}

impl<'a> RawLogLine<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut rest = raw.trim_start();
        let mut decoration = Decoration::None;
        while let Some((shape, end)) = strip_one(rest) {
            if decoration == Decoration::None {
                decoration = shape;
            }
            rest = rest[end..].trim_start();
        }
        Self {
            raw,
            decoration,
            payload: rest.trim(),
        }
    }
}

/// One layer of decoration at the start of `line`, with the byte offset where
/// it ends. Every match consumes the `[stdlog]` tag, so repeated stripping
/// terminates.
fn strip_one(line: &str) -> Option<(Decoration, usize)> {
    if let Some(m) = FULL_PREFIX.find(line) {
        Some((Decoration::Full, m.end()))
    } else {
        CONTINUATION_PREFIX
            .find(line)
            .map(|m| (Decoration::Continuation, m.end()))
    }
}

/// Return the semantic payload of `line` with decoration and surrounding
/// whitespace removed.
pub fn normalize_line(line: &str) -> &str {
    RawLogLine::parse(line).payload
}

/// Normalise every line of `text`, preserving line order.
pub fn normalize_text(text: &str) -> Vec<&str> {
    text.lines().map(normalize_line).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_prefix_is_stripped() {
        let line = RawLogLine::parse(
            "[stdlog] 2026-01-14 21:12:20,986 avocado.test INFO | ✓ Pass 2: 2165.8 MB/s, 202s",
        );
        assert_eq!(line.decoration, Decoration::Full);
        assert_eq!(line.payload, "✓ Pass 2: 2165.8 MB/s, 202s");
    }

    #[test]
    fn continuation_prefix_is_stripped() {
        let line = RawLogLine::parse("[stdlog]     \"50th_us\": 12.0,");
        assert_eq!(line.decoration, Decoration::Continuation);
        assert_eq!(line.payload, "\"50th_us\": 12.0,");
    }

    #[test]
    fn bare_tag_normalises_to_empty() {
        assert_eq!(normalize_line("[stdlog]"), "");
    }

    #[test]
    fn plain_line_is_only_trimmed() {
        let line = RawLogLine::parse("  fio-3.28  \r\n");
        assert_eq!(line.decoration, Decoration::None);
        assert_eq!(line.payload, "fio-3.28");
    }

    #[test]
    fn nested_decoration_is_stripped_to_the_payload() {
        let line = RawLogLine::parse(
            "[stdlog] 2026-01-14 21:12:20,986 avocado.test INFO | \
             [stdlog] 2026-01-14 21:12:20,987 sub.test INFO | ✓ Pass 1: 5 MiB/s",
        );
        assert_eq!(line.decoration, Decoration::Full);
        assert_eq!(line.payload, "✓ Pass 1: 5 MiB/s");
        assert_eq!(normalize_line(line.payload), line.payload);
    }

    #[test]
    fn continuation_wrapping_full_prefix_reports_outer_shape() {
        let line = RawLogLine::parse(
            "[stdlog]   [stdlog] 2026-01-14 21:12:20,987 sub.test DEBUG| [stdout] fio-3.28",
        );
        assert_eq!(line.decoration, Decoration::Continuation);
        assert_eq!(line.payload, "[stdout] fio-3.28");
    }

    #[test]
    fn full_prefix_with_empty_message() {
        assert_eq!(
            normalize_line("[stdlog] 2026-01-14 21:12:20,986 avocado.test INFO |"),
            ""
        );
    }
}
