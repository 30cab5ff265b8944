//! qualog — metrics from hardware qualification logs.
//!
//! Reads test-runner job directories, extracts storage and memory benchmark
//! metrics from every test's `debug.log`, and writes per-suite reports. The
//! workspace crates are re-exported so integration tests and benches can
//! import them from one place.
//!
//! # Architecture
//!
//! ```text
//! qualog-jobs ──► qualog-core ──► qualog-report
//!  (index, logs)   (extraction)    (csv, text)
//! ```
//!
//! Extraction is synchronous; tests within a job are built in parallel.

pub use qualog_core as core;
pub use qualog_jobs as jobs;
pub use qualog_report as report;

pub use qualog_core::{
    build_record, extract_samples, ExtractorKind, MetricField, MetricKind, MetricSample, MetricSet,
    Suite, TestIdentity, TestRecord, Unit,
};
