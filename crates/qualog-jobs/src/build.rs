//! Building [`TestRecord`]s for whole jobs.
//!
//! Tests are independent, so each job's entries are processed on the rayon
//! pool. Output order always matches index order.

use std::path::{Path, PathBuf};

use qualog_core::config::Config;
use qualog_core::{build_record, TestRecord};
use rayon::prelude::*;

use crate::error::JobError;
use crate::index::{ResultsIndex, TestEntry};
use crate::locate::{find_log, read_log};

/// How the set of jobs was chosen.
#[derive(Debug, Clone)]
pub enum JobSelection {
    /// A directory named explicitly; never filtered by test count.
    Explicit(PathBuf),
    /// The most recent `job-*` directories under the configured root.
    Recent,
}

/// Build one record per index entry of `job_dir`.
pub fn build_job(job_dir: &Path, config: &Config) -> Result<Vec<TestRecord>, JobError> {
    let index = ResultsIndex::load(job_dir)?;
    Ok(build_index(&index, job_dir, config))
}

pub fn build_index(index: &ResultsIndex, job_dir: &Path, config: &Config) -> Vec<TestRecord> {
    index
        .tests
        .par_iter()
        .map(|entry| build_entry(entry, &index.job_id, job_dir, config))
        .collect()
}

fn build_entry(entry: &TestEntry, job_id: &str, job_dir: &Path, config: &Config) -> TestRecord {
    let identity = entry.identity(job_id, job_dir);
    let log = find_log(job_dir, entry);
    let text = log.as_deref().and_then(read_log);
    if log.is_none() {
        tracing::debug!(test = %entry.name, "missing debug.log");
    }

    let base_dir = log.as_deref().and_then(Path::parent);
    let record = build_record(identity, text.as_deref(), config, base_dir);
    if text.is_some() && record.metrics.is_empty() {
        tracing::debug!(test = %entry.name, "no metrics parsed");
    }
    record
}

/// Resolve a selection into job directories and build their records.
///
/// A job that cannot be read is logged and skipped. In [`JobSelection::Recent`]
/// mode, jobs with fewer than `jobs.min_tests` entries are skipped too.
pub fn collect_records(selection: &JobSelection, config: &Config) -> Result<Vec<TestRecord>, JobError> {
    let (dirs, explicit) = match selection {
        JobSelection::Explicit(dir) => (vec![dir.clone()], true),
        JobSelection::Recent => (
            crate::discover::recent_jobs(&config.jobs.root, config.jobs.recent)?,
            false,
        ),
    };

    let mut records = Vec::new();
    for dir in &dirs {
        let index = match ResultsIndex::load(dir) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(job = %dir.display(), %err, "skipping job");
                continue;
            }
        };
        if !explicit && index.tests.len() < config.jobs.min_tests {
            tracing::debug!(
                job = %dir.display(),
                tests = index.tests.len(),
                min_tests = config.jobs.min_tests,
                "ignored: too few tests"
            );
            continue;
        }
        let built = build_index(&index, dir, config);
        tracing::debug!(job = %dir.display(), tests = built.len(), "parsed job");
        records.extend(built);
    }
    Ok(records)
}
