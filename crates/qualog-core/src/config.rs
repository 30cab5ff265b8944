//! Configuration types for qualog.
//!
//! [`Config::load`] layers an optional user file (by default
//! `~/.config/qualog/config.toml`) on top of the embedded defaults.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[extract]
lookahead_window    = 300
generic_marker      = "iomix"
generic_number_rule = "second_to_last"
decimal_megabytes   = false

[markers]
benchmark  = "Benchmark results:"
filesystem = "Filesystem test results:"

[stream]
tags          = ["stdout", "stderr"]
json_tags     = ["stdout"]
header_tokens = ["fio", "stress-ng"]

[jobs]
root      = "./job-results"
recent    = 1
min_tests = 2

[report]
out_dir = "./reports"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub jobs: JobsConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Which numeric token a generic `metrc:` summary line contributes.
///
/// stress-ng prints bogo ops/s twice (real time, then usr+sys time). Which
/// column is wanted is a guess about the tool's output format, so it is
/// exposed here rather than hidden in the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberRule {
    SecondToLast,
    Last,
}

/// `[extract]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Lines scanned for an embedded JSON block, counting the marker line.
    #[serde(default = "default_lookahead_window")]
    pub lookahead_window: usize,
    #[serde(default = "default_generic_marker")]
    pub generic_marker: String,
    #[serde(default = "default_generic_number_rule")]
    pub generic_number_rule: NumberRule,
    /// Convert `MB/s` checkmark values from 10^6 bytes to mebibytes.
    #[serde(default)]
    pub decimal_megabytes: bool,
}

fn default_lookahead_window() -> usize { 300 }
fn default_generic_marker() -> String { "iomix".to_string() }
fn default_generic_number_rule() -> NumberRule { NumberRule::SecondToLast }

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            lookahead_window: default_lookahead_window(),
            generic_marker: default_generic_marker(),
            generic_number_rule: default_generic_number_rule(),
            decimal_megabytes: false,
        }
    }
}

/// `[markers]` section: phrases that anchor embedded JSON blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_benchmark_marker")]
    pub benchmark: String,
    #[serde(default = "default_filesystem_marker")]
    pub filesystem: String,
}

fn default_benchmark_marker() -> String { "Benchmark results:".to_string() }
fn default_filesystem_marker() -> String { "Filesystem test results:".to_string() }

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            benchmark: default_benchmark_marker(),
            filesystem: default_filesystem_marker(),
        }
    }
}

/// `[stream]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// Bracket tags (`[stdout]`, `[stderr]`) that mark subprocess output.
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    /// Tags whose lines feed the JSON object collector.
    #[serde(default = "default_json_tags")]
    pub json_tags: Vec<String>,
    /// Tool names whose output lines are kept without a bracket tag.
    #[serde(default = "default_header_tokens")]
    pub header_tokens: Vec<String>,
}

fn default_tags() -> Vec<String> { vec!["stdout".to_string(), "stderr".to_string()] }
fn default_json_tags() -> Vec<String> { vec!["stdout".to_string()] }
fn default_header_tokens() -> Vec<String> { vec!["fio".to_string(), "stress-ng".to_string()] }

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            json_tags: default_json_tags(),
            header_tokens: default_header_tokens(),
        }
    }
}

/// `[jobs]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsConfig {
    #[serde(default = "default_job_root")]
    pub root: PathBuf,
    #[serde(default = "default_recent")]
    pub recent: usize,
    #[serde(default = "default_min_tests")]
    pub min_tests: usize,
}

fn default_job_root() -> PathBuf { PathBuf::from("./job-results") }
fn default_recent() -> usize { 1 }
fn default_min_tests() -> usize { 2 }

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            root: default_job_root(),
            recent: default_recent(),
            min_tests: default_min_tests(),
        }
    }
}

/// `[report]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_out_dir() -> PathBuf { PathBuf::from("./reports") }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path` (or the per-user config file when `None`), layered on top
    /// of the built-in defaults. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("qualog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
