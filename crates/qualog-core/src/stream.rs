//! Stream reconstructor. Recovers a subprocess's stdout/stderr from a
//! decorated log, and collects the JSON objects printed on it.
//!
//! A normalised line belongs to the stream when it either carries a bracket
//! tag such as `[stdout]` (only the text after the tag is kept) or begins with
//! a payload signature: an opening `{` or a known tool header token.

use regex::Regex;
use serde_json::{Map, Value};

use crate::config::StreamConfig;
use crate::normalizer::normalize_line;

/// Where a reconstructed line came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StreamOrigin {
    /// Carried an explicit `[<tag>]` annotation.
    Tagged(String),
    /// Recognised by its leading JSON brace or tool header.
    Signature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamLine {
    pub origin: StreamOrigin,
    pub text: String,
}

/// Ordered lines believed to be the undecorated output of a subprocess.
/// Built once per log and never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconstructedStream {
    lines: Vec<StreamLine>,
}

impl ReconstructedStream {
    /// Reconstruct from full log text.
    pub fn from_text(text: &str, config: &StreamConfig) -> Self {
        let lines: Vec<&str> = text.lines().map(normalize_line).collect();
        Self::from_normalized(&lines, config)
    }

    /// Reconstruct from lines that have already been through the normalizer.
    pub fn from_normalized<S: AsRef<str>>(lines: &[S], config: &StreamConfig) -> Self {
        let recognizer = Recognizer::new(config);
        Self {
            lines: lines
                .iter()
                .filter_map(|l| recognizer.recognize(l.as_ref()))
                .collect(),
        }
    }

    pub fn lines(&self) -> &[StreamLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines that may carry JSON: signature lines plus lines tagged with one
    /// of `json_tags`.
    pub fn json_lines<'a>(&'a self, json_tags: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        self.lines
            .iter()
            .filter(move |l| match &l.origin {
                StreamOrigin::Signature => true,
                StreamOrigin::Tagged(tag) => json_tags.iter().any(|t| t == tag),
            })
            .map(|l| l.text.as_str())
    }

    /// Every JSON object found on the JSON-carrying lines, in discovery order.
    pub fn json_objects(&self, json_tags: &[String]) -> Vec<Map<String, Value>> {
        collect_json_objects(self.json_lines(json_tags))
    }
}

// ---------------------------------------------------------------------------
// Line recognition
// ---------------------------------------------------------------------------

struct Recognizer<'c> {
    tag_re: Option<Regex>,
    header_tokens: &'c [String],
}

impl<'c> Recognizer<'c> {
    fn new(config: &'c StreamConfig) -> Self {
        let tag_re = if config.tags.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = config.tags.iter().map(|t| regex::escape(t)).collect();
            Regex::new(&format!(r"\[({})\]\s*(.*)$", alternatives.join("|"))).ok()
        };
        Self {
            tag_re,
            header_tokens: &config.header_tokens,
        }
    }

    fn recognize(&self, line: &str) -> Option<StreamLine> {
        if let Some(caps) = self.tag_re.as_ref().and_then(|re| re.captures(line)) {
            return Some(StreamLine {
                origin: StreamOrigin::Tagged(caps[1].to_string()),
                text: caps[2].trim_end().to_string(),
            });
        }
        let is_signature = line.starts_with('{')
            || self.header_tokens.iter().any(|t| line.starts_with(t.as_str()));
        is_signature.then(|| StreamLine {
            origin: StreamOrigin::Signature,
            text: line.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// JSON object collector
// ---------------------------------------------------------------------------

/// Collect JSON objects spread over consecutive lines.
///
/// Accumulation starts at a line beginning with `{`. A parse is attempted
/// whenever the buffer's braces balance; success emits the object and resets.
/// A buffer that never parses swallows the rest of the stream.
pub fn collect_json_objects<'a, I>(lines: I) -> Vec<Map<String, Value>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut objects = Vec::new();
    let mut buf: Option<Accumulator> = None;

    for line in lines {
        let line = line.trim();
        if buf.is_none() {
            if !line.starts_with('{') {
                continue;
            }
            buf = Some(Accumulator::default());
        }
        let Some(acc) = buf.as_mut() else { continue };
        acc.push(line);
        if acc.balanced() {
            if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(&acc.text) {
                objects.push(obj);
                buf = None;
            }
        }
    }

    if buf.is_some() {
        tracing::debug!("unterminated JSON object at end of stream");
    }
    objects
}

/// Text buffer with a running brace depth that ignores braces in strings.
#[derive(Debug, Default)]
struct Accumulator {
    text: String,
    depth: i64,
    in_string: bool,
    escaped: bool,
}

impl Accumulator {
    fn push(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
        for c in line.chars() {
            if self.in_string {
                match c {
                    _ if self.escaped => self.escaped = false,
                    '\\' => self.escaped = true,
                    '"' => self.in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' => self.in_string = true,
                '{' | '[' => self.depth += 1,
                '}' | ']' => self.depth -= 1,
                _ => {}
            }
        }
    }

    fn balanced(&self) -> bool {
        self.depth == 0 && !self.in_string
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
