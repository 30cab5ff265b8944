//! Metric extractors — independent recognisers, one per text or JSON shape.
//!
//! Each extractor is a pure function of an [`ExtractContext`] that returns
//! zero or more [`MetricSample`]s. Malformed numbers, missing keys and
//! unreadable files produce no sample; nothing here returns an error.
//!
//! [`ExtractorKind::ORDER`] is the fixed execution order. The record merger
//! applies results in that order, so a later extractor overwrites an earlier
//! one that targeted the same field.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::block::{extract_block_from_lines, EmbeddedJsonBlock};
use crate::config::Config;
use crate::normalizer::normalize_line;
use crate::stream::ReconstructedStream;
use crate::types::MetricSample;

pub mod aggregate;
pub mod checkmark;
pub mod file_ref;
pub mod generic;
pub mod iops;
pub mod latency;
pub mod rates;
pub mod tabular;

// ---------------------------------------------------------------------------
// Extractor identity
// ---------------------------------------------------------------------------

/// Tag identifying each extractor strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    /// `✓ Pass N: <bw> MiB/s` kernel fio summaries.
    Checkmark,
    /// `✓ OLTP:` and `✓ Mixed 50/50:` IOPS summaries.
    MixedIops,
    /// `✓ SQLite insert rate: ... rows/s, select: ... ops/s`.
    RatePair,
    /// SPDK perf per-namespace rows.
    Tabular,
    /// stress-ng `metrc:` lines.
    Generic,
    /// fio JSON objects on the subprocess stream.
    Aggregate,
    /// `latency_percentiles` inside the benchmark results block.
    Latency,
    /// fio JSON file named inside the filesystem results block.
    FileRef,
}

/// How repeated samples from one extractor for one field are reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Last,
}

impl ExtractorKind {
    pub const ORDER: [ExtractorKind; 8] = [
        ExtractorKind::Checkmark,
        ExtractorKind::MixedIops,
        ExtractorKind::RatePair,
        ExtractorKind::Tabular,
        ExtractorKind::Generic,
        ExtractorKind::Aggregate,
        ExtractorKind::Latency,
        ExtractorKind::FileRef,
    ];

    pub fn reduction(self) -> Reduction {
        match self {
            ExtractorKind::Checkmark => Reduction::Mean,
            _ => Reduction::Last,
        }
    }

    /// Position in [`ExtractorKind::ORDER`]; higher wins on conflict.
    pub fn precedence(self) -> usize {
        self as usize
    }

    pub fn run(self, ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
        match self {
            ExtractorKind::Checkmark => checkmark::extract(ctx),
            ExtractorKind::MixedIops => iops::extract(ctx),
            ExtractorKind::RatePair => rates::extract(ctx),
            ExtractorKind::Tabular => tabular::extract(ctx),
            ExtractorKind::Generic => generic::extract(ctx),
            ExtractorKind::Aggregate => aggregate::extract(ctx),
            ExtractorKind::Latency => latency::extract(ctx),
            ExtractorKind::FileRef => file_ref::extract(ctx),
        }
    }
}

impl std::fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExtractorKind::Checkmark => "checkmark",
            ExtractorKind::MixedIops => "mixed_iops",
            ExtractorKind::RatePair => "rate_pair",
            ExtractorKind::Tabular => "tabular",
            ExtractorKind::Generic => "generic",
            ExtractorKind::Aggregate => "aggregate",
            ExtractorKind::Latency => "latency",
            ExtractorKind::FileRef => "file_ref",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Everything an extractor may look at for one test's log.
pub struct ExtractContext<'a> {
    pub test_name: &'a str,
    /// Normalised log lines.
    pub lines: Vec<&'a str>,
    pub stream: ReconstructedStream,
    pub config: &'a Config,
    /// Directory that relative artifact paths are resolved against.
    pub base_dir: Option<PathBuf>,
}

impl<'a> ExtractContext<'a> {
    pub fn new(test_name: &'a str, log_text: &'a str, config: &'a Config) -> Self {
        let lines: Vec<&str> = log_text.lines().map(normalize_line).collect();
        let stream = ReconstructedStream::from_normalized(&lines, &config.stream);
        Self {
            test_name,
            lines,
            stream,
            config,
            base_dir: None,
        }
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// First embedded JSON block anchored by `marker`.
    pub fn block(&self, marker: &str) -> Option<EmbeddedJsonBlock> {
        extract_block_from_lines(&self.lines, marker, self.config.extract.lookahead_window)
    }

    /// JSON objects printed on the subprocess's stdout.
    pub fn stream_objects(&self) -> Vec<Map<String, Value>> {
        self.stream.json_objects(&self.config.stream.json_tags)
    }

    /// Resolve a path printed in the log.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        match &self.base_dir {
            Some(base) if p.is_relative() && !p.exists() => base.join(p),
            _ => p.to_path_buf(),
        }
    }
}

/// Run every extractor in [`ExtractorKind::ORDER`] and concatenate results.
pub fn run_all(ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
    ExtractorKind::ORDER
        .iter()
        .flat_map(|kind| kind.run(ctx))
        .collect()
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Parse a captured decimal token, dropping anything non-finite.
pub(crate) fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numeric view of a JSON value; numeric strings are accepted.
pub(crate) fn json_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_precedence() {
        for (i, kind) in ExtractorKind::ORDER.iter().enumerate() {
            assert_eq!(kind.precedence(), i);
        }
    }

    #[test]
    fn numbers_degrade_to_none() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(json_number(&Value::String("7".into())), Some(7.0));
        assert_eq!(json_number(&Value::Bool(true)), None);
    }
}
