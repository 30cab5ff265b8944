//! Builders for decorated logs and job directories.
//!
//! These builders are designed for readability in tests, not for production
//! use. They panic on I/O failure rather than returning `Result`.

use std::path::{Path, PathBuf};

use serde_json::Value;

// ---------------------------------------------------------------------------
// DecoratedLog
// ---------------------------------------------------------------------------

/// Fluent builder for a `debug.log` as the test runner writes it.
///
/// ```rust
/// let log = DecoratedLog::new()
///     .info("✓ Pass 1: 500.0 MiB/s, 10s")
///     .stdout("fio-3.28")
///     .json_block("Benchmark results:", &json!({"a": 1}))
///     .build();
/// ```
#[derive(Default)]
pub struct DecoratedLog {
    lines: Vec<String>,
    millis: u32,
}

impl DecoratedLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn prefix(&mut self, component: &str, level: &str, sep: &str) -> String {
        self.millis += 1;
        let secs = 20 + self.millis / 1000;
        format!(
            "[stdlog] 2026-01-14 21:12:{:02},{:03} {component} {level}{sep}",
            secs % 60,
            self.millis % 1000
        )
    }

    /// A full-prefix `avocado.test INFO |` line.
    pub fn info(mut self, message: &str) -> Self {
        let prefix = self.prefix("avocado.test", "INFO", " | ");
        self.lines.push(format!("{prefix}{message}"));
        self
    }

    /// A `[stdout]` line from the process runner.
    pub fn stdout(mut self, text: &str) -> Self {
        let prefix = self.prefix("avocado.utils.process", "DEBUG", "| ");
        self.lines.push(format!("{prefix}[stdout] {text}"));
        self
    }

    /// A `[stderr]` line from the process runner.
    pub fn stderr(mut self, text: &str) -> Self {
        let prefix = self.prefix("avocado.utils.process", "DEBUG", "| ");
        self.lines.push(format!("{prefix}[stderr] {text}"));
        self
    }

    /// A continuation line (`[stdlog]` tag only).
    pub fn continuation(mut self, text: &str) -> Self {
        self.lines.push(format!("[stdlog]   {text}"));
        self
    }

    /// An undecorated line.
    pub fn plain(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    /// `marker` followed by `value` pretty-printed over continuation lines,
    /// as `log.info(f"{marker} {json.dumps(value, indent=2)}")` produces.
    pub fn json_block(mut self, marker: &str, value: &Value) -> Self {
        let pretty = serde_json::to_string_pretty(value).expect("serialisable");
        let mut lines = pretty.lines();
        let first = lines.next().unwrap_or_default();
        self = self.info(&format!("{marker} {first}"));
        for line in lines {
            self = self.continuation(line);
        }
        self
    }

    /// Each line of `value`'s pretty JSON as a `[stdout]` line.
    pub fn stdout_json(mut self, value: &Value) -> Self {
        let pretty = serde_json::to_string_pretty(value).expect("serialisable");
        for line in pretty.lines() {
            self = self.stdout(line);
        }
        self
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

// ---------------------------------------------------------------------------
// JobDir
// ---------------------------------------------------------------------------

/// A job directory in a temp dir, with `results.json` and per-test logs.
pub struct JobDir {
    /// Owns the temp dir when the job was created standalone.
    _root: Option<tempfile::TempDir>,
    pub path: PathBuf,
    tests: Vec<Value>,
}

impl JobDir {
    /// A job in a fresh temp dir, removed on drop.
    pub fn new(name: &str) -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let mut job = Self::new_in(root.path(), name);
        job._root = Some(root);
        job
    }

    /// A job directory `parent/name`; the caller owns `parent`.
    pub fn new_in(parent: &Path, name: &str) -> Self {
        let path = parent.join(name);
        std::fs::create_dir_all(&path).expect("job dir");
        Self {
            _root: None,
            path,
            tests: Vec::new(),
        }
    }

    /// Add a test whose log lives under `test-results/` (found by id).
    pub fn test_with_log(self, name: &str, status: &str, log: &str) -> Self {
        self.test_with_files(name, status, log, &[])
    }

    /// Like [`JobDir::test_with_log`], with extra files beside `debug.log`.
    pub fn test_with_files(mut self, name: &str, status: &str, log: &str, files: &[(&str, &str)]) -> Self {
        let n = self.tests.len() + 1;
        let id = format!("{n:02}-suite.py:{name}");
        let dir = self
            .path
            .join("test-results")
            .join(format!("{n:02}-suite.py_{}", name.replace(':', "_")));
        std::fs::create_dir_all(&dir).expect("test dir");
        std::fs::write(dir.join("debug.log"), log).expect("log");
        for (file, contents) in files {
            std::fs::write(dir.join(file), contents).expect("artifact");
        }
        self.tests.push(serde_json::json!({
            "name": name,
            "id": id,
            "status": status,
            "time_elapsed": 1.5,
        }));
        self
    }

    /// Add a test with an explicit `logfile` path.
    pub fn test_with_logfile(mut self, name: &str, logfile: &Path) -> Self {
        self.tests.push(serde_json::json!({
            "name": name,
            "status": "PASS",
            "logfile": logfile.display().to_string(),
        }));
        self
    }

    /// Add a test with no log anywhere.
    pub fn test_without_log(mut self, name: &str, status: &str) -> Self {
        self.tests.push(serde_json::json!({"name": name, "status": status}));
        self
    }

    /// Write `results.json` and return the finished directory.
    pub fn write(self, job_id: &str) -> Self {
        let index = serde_json::json!({"job_id": job_id, "tests": self.tests});
        std::fs::write(self.path.join("results.json"), index.to_string()).expect("index");
        self
    }
}
