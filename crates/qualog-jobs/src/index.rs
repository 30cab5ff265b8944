//! The results index (`results.json`) written by the test runner.
//!
//! Only a handful of keys are read and every one of them is optional, so the
//! index is walked as a [`serde_json::Value`] rather than deserialised into a
//! strict schema. Each element of `tests` becomes one [`TestEntry`], even
//! when it is not an object.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use qualog_core::TestIdentity;
use serde_json::Value;

use crate::error::JobError;

pub const RESULTS_FILE: &str = "results.json";

/// One test entry from the index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestEntry {
    pub name: String,
    pub status: String,
    pub time_elapsed: f64,
    /// Explicit path to the test's log, if the runner recorded one.
    pub logfile: Option<PathBuf>,
    /// Runner id, e.g. `01-storage_test_suite.py:Kernel.test_read`.
    pub id: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TestEntry {
    pub fn from_value(value: &Value) -> Self {
        let str_of = |key: &str| value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());
        let num_of = |key: &str| value.get(key).and_then(number);
        Self {
            name: str_of("name").unwrap_or_default().to_string(),
            status: str_of("status").unwrap_or("UNKNOWN").to_string(),
            time_elapsed: num_of("time_elapsed").unwrap_or(0.0),
            logfile: str_of("logfile").map(PathBuf::from),
            id: str_of("id").map(str::to_string),
            start: num_of("actual_time_start").and_then(epoch),
            end: num_of("actual_time_end").and_then(epoch),
        }
    }

    pub fn identity(&self, job_id: &str, job_dir: &Path) -> TestIdentity {
        TestIdentity {
            job_id: job_id.to_string(),
            job_dir: job_dir.display().to_string(),
            test_name: self.name.clone(),
            status: self.status.clone(),
            duration_s: self.time_elapsed,
            start_time: self.start,
            end_time: self.end,
        }
    }
}

/// Parsed `results.json` of one job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsIndex {
    pub job_id: String,
    pub tests: Vec<TestEntry>,
}

impl ResultsIndex {
    /// Load `<job_dir>/results.json`. A missing file is an empty index named
    /// after the directory; a file that is not JSON is an error.
    pub fn load(job_dir: &Path) -> Result<Self, JobError> {
        let path = job_dir.join(RESULTS_FILE);
        let text = match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(source) => return Err(JobError::Io { path, source }),
        };
        if text.trim().is_empty() {
            return Ok(Self::from_value(&Value::Null, job_dir));
        }
        let value: Value = serde_json::from_str(&text)
            .map_err(|source| JobError::MalformedIndex { path, source })?;
        Ok(Self::from_value(&value, job_dir))
    }

    pub fn from_value(value: &Value, job_dir: &Path) -> Self {
        let job_id = match value.get("job_id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => dir_name(job_dir),
        };
        let tests = value
            .get("tests")
            .and_then(Value::as_array)
            .map(|tests| tests.iter().map(TestEntry::from_value).collect())
            .unwrap_or_default();
        Self { job_id, tests }
    }
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn epoch(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}
