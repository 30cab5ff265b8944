//! Embedded block extractor — finds the JSON object printed after a marker
//! phrase such as `Benchmark results:`, usually pretty-printed over many
//! decorated lines.
//!
//! Only the first line containing the marker is considered. An object that
//! fits on the marker line is returned without looking further. The scan covers
//! at most `window` lines counting the marker line, so a block that never
//! closes costs a bounded amount of work and yields `None`.

use serde_json::{Map, Value};

use crate::normalizer::normalize_line;

/// Default lookahead, in lines, counting the marker line.
pub const DEFAULT_LOOKAHEAD: usize = 300;

/// A JSON object anchored by a marker phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedJsonBlock {
    pub marker: String,
    /// Index of the line that contained the marker.
    pub start_line: usize,
    pub object: Map<String, Value>,
}

/// Locate `marker` in raw log text and parse the object that follows it.
pub fn extract_block(text: &str, marker: &str, window: usize) -> Option<EmbeddedJsonBlock> {
    let lines: Vec<&str> = text.lines().map(normalize_line).collect();
    extract_block_from_lines(&lines, marker, window)
}

/// Same as [`extract_block`] over lines already through the normalizer.
pub fn extract_block_from_lines<S: AsRef<str>>(
    lines: &[S],
    marker: &str,
    window: usize,
) -> Option<EmbeddedJsonBlock> {
    if marker.is_empty() {
        return None;
    }
    let start = lines.iter().position(|l| l.as_ref().contains(marker))?;
    let head = lines[start].as_ref();
    let tail = head
        .find(marker)
        .map(|pos| head[pos + marker.len()..].trim())
        .unwrap_or("");

    let mut payload: Vec<&str> = Vec::new();
    if !tail.is_empty() {
        // A block printed on the marker line alone is complete.
        if tail.starts_with('{') {
            if let Some(object) = parse_object(&[tail]) {
                return Some(found(marker, start, object));
            }
        }
        payload.push(tail);
    }

    let end = start.saturating_add(window).min(lines.len());
    for line in lines.iter().take(end).skip(start + 1) {
        let line = line.as_ref();
        if line.is_empty() {
            if payload.is_empty() {
                continue;
            }
            break;
        }
        payload.push(line);
        if line == "}" && payload.iter().any(|l| l.contains('{')) {
            if let Some(object) = parse_object(&payload) {
                return Some(found(marker, start, object));
            }
        }
    }

    match parse_object(&payload) {
        Some(object) => Some(found(marker, start, object)),
        None => {
            tracing::debug!(marker, line = start, "embedded JSON block did not parse");
            None
        }
    }
}

fn found(marker: &str, start_line: usize, object: Map<String, Value>) -> EmbeddedJsonBlock {
    EmbeddedJsonBlock {
        marker: marker.to_string(),
        start_line,
        object,
    }
}

fn parse_object(payload: &[&str]) -> Option<Map<String, Value>> {
    let text = payload.join("\n");
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Object(obj)) => Some(obj),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
