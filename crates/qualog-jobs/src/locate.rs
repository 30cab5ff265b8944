//! Finding a test's `debug.log` inside a job directory.

use std::path::{Path, PathBuf};

use crate::index::TestEntry;

pub const RESULTS_DIR: &str = "test-results";
pub const LOG_FILE: &str = "debug.log";

/// Resolve the log for `entry`:
///
/// 1. the explicit `logfile` path, if it exists;
/// 2. a `test-results/<dir>/debug.log` whose directory contains the id's
///    prefix (before `:`) and ends with the test name (`:` → `_`);
/// 3. a directory whose name contains the test name.
pub fn find_log(job_dir: &Path, entry: &TestEntry) -> Option<PathBuf> {
    if let Some(path) = entry.logfile.as_ref().filter(|p| p.exists()) {
        return Some(path.clone());
    }

    let id = entry.id.as_deref().filter(|id| !id.is_empty())?;
    let results = job_dir.join(RESULTS_DIR);
    let dirs = test_dirs(&results);
    let name = entry.name.replace(':', "_");
    let prefix = id.split(':').next().unwrap_or(id);

    let by_id = dirs
        .iter()
        .filter(|(dir_name, _)| dir_name.contains(prefix) && dir_name.ends_with(&name));
    let by_name = dirs
        .iter()
        .filter(|(dir_name, _)| !name.is_empty() && dir_name.contains(&name));

    by_id
        .chain(by_name)
        .map(|(_, dir)| dir.join(LOG_FILE))
        .find(|log| log.exists())
}

/// Subdirectories of `results` with their names, sorted for determinism.
fn test_dirs(results: &Path) -> Vec<(String, PathBuf)> {
    let Ok(read) = std::fs::read_dir(results) else {
        return Vec::new();
    };
    let mut dirs: Vec<(String, PathBuf)> = read
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| (e.file_name().to_string_lossy().into_owned(), e.path()))
        .collect();
    dirs.sort();
    dirs
}

/// Read a log as UTF-8, replacing invalid sequences. Unreadable files are
/// `None`.
pub fn read_log(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "log unreadable");
            None
        }
    }
}
