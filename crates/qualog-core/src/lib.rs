//! qualog-core — metric extraction for hardware qualification logs.
//!
//! This crate turns the free-form `debug.log` of a storage or memory
//! qualification test into a typed [`TestRecord`], whatever mix of
//! decorated log lines, pretty-printed JSON blocks, checkmark summaries and
//! tool status lines the log contains.
//!
//! # Architecture
//!
//! ```text
//! normalizer ──► stream ──► extract::* ──► merge ──► TestRecord
//!      │                        ▲
//!      └──────► block ──────────┘
//! ```
//!
//! Extraction never fails: anything unparseable yields an absent metric.

pub mod block;
pub mod config;
pub mod extract;
pub mod merge;
pub mod normalizer;
pub mod pipeline;
pub mod stream;
pub mod types;

pub use extract::ExtractorKind;
pub use pipeline::{build_record, extract_samples};
pub use types::{MetricField, MetricKind, MetricSample, MetricSet, Suite, TestIdentity, TestRecord, Unit};
