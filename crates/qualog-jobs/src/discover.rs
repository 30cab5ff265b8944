//! Job directory discovery.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::JobError;

pub const JOB_PREFIX: &str = "job-";

/// The `n` most recently modified `job-*` directories under `root`, newest
/// first.
pub fn recent_jobs(root: &Path, n: usize) -> Result<Vec<PathBuf>, JobError> {
    if !root.is_dir() {
        return Err(JobError::MissingRoot(root.to_path_buf()));
    }
    let read = std::fs::read_dir(root).map_err(|source| JobError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut jobs: Vec<(SystemTime, PathBuf)> = read
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with(JOB_PREFIX))
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| {
            let mtime = e
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (mtime, e.path())
        })
        .collect();

    jobs.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    Ok(jobs.into_iter().take(n).map(|(_, p)| p).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_job_dirs_are_listed() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("job-a")).unwrap();
        std::fs::create_dir(root.path().join("latest")).unwrap();
        std::fs::write(root.path().join("job-file"), "").unwrap();

        let jobs = recent_jobs(root.path(), 10).unwrap();
        assert_eq!(jobs, vec![root.path().join("job-a")]);
    }

    #[test]
    fn limit_is_applied() {
        let root = tempfile::tempdir().unwrap();
        for name in ["job-1", "job-2", "job-3"] {
            std::fs::create_dir(root.path().join(name)).unwrap();
        }
        assert_eq!(recent_jobs(root.path(), 2).unwrap().len(), 2);
    }

    #[test]
    fn missing_root_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let err = recent_jobs(&root.path().join("nope"), 1).unwrap_err();
        assert!(matches!(err, JobError::MissingRoot(_)));
    }
}
