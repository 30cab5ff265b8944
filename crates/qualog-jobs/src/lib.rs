//! qualog-jobs — test-runner job directories as a source of logs.
//!
//! A job directory holds a `results.json` index and one `debug.log` per
//! test under `test-results/`. This crate finds jobs, reads their index,
//! locates each test's log and hands it to [`qualog_core`] for extraction.

pub mod build;
pub mod discover;
pub mod error;
pub mod index;
pub mod locate;

pub use build::{build_job, collect_records, JobSelection};
pub use error::JobError;
pub use index::{ResultsIndex, TestEntry};
