//! Core types for qualog-core.
//!
//! This module defines the data structures shared by every pipeline stage:
//! the typed [`MetricSample`] produced by extractors, the [`MetricField`]
//! names a sample can target, and the final per-test [`TestRecord`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::ExtractorKind;

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

/// Unit attached to a [`MetricSample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Mebibytes per second, the canonical bandwidth unit of a record.
    MibPerSec,
    /// Bandwidth as printed with an `MB/s` label.
    MbPerSec,
    Iops,
    Microseconds,
    RowsPerSec,
    OpsPerSec,
}

impl Unit {
    /// Parse a bandwidth label as it appears in summary lines.
    pub fn from_label(label: &str) -> Result<Self, UnknownUnit> {
        match label.to_ascii_lowercase().as_str() {
            "mib/s" => Ok(Unit::MibPerSec),
            "mb/s" => Ok(Unit::MbPerSec),
            _ => Err(UnknownUnit(label.to_string())),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::MibPerSec => write!(f, "MiB/s"),
            Unit::MbPerSec => write!(f, "MB/s"),
            Unit::Iops => write!(f, "IOPS"),
            Unit::Microseconds => write!(f, "us"),
            Unit::RowsPerSec => write!(f, "rows/s"),
            Unit::OpsPerSec => write!(f, "ops/s"),
        }
    }
}

/// A unit label that no extractor knows how to interpret.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit label {0:?}")]
pub struct UnknownUnit(pub String);

// ---------------------------------------------------------------------------
// Metric kinds and fields
// ---------------------------------------------------------------------------

/// Broad category of a metric observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Bandwidth,
    Iops,
    Latency,
    Rate,
    /// Workload-specific counters such as rows/s or bogo ops/s.
    Custom,
}

/// Named metric slot on a [`TestRecord`]. Every sample targets exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    SpdkIops,
    SpdkBandwidth,
    SpdkLatency,
    ReadBandwidth,
    WriteBandwidth,
    ReadIops,
    WriteIops,
    InsertRate,
    OpsRate,
    P50Latency,
    P99Latency,
}

impl MetricField {
    pub const ALL: [MetricField; 11] = [
        MetricField::SpdkIops,
        MetricField::SpdkBandwidth,
        MetricField::SpdkLatency,
        MetricField::ReadBandwidth,
        MetricField::WriteBandwidth,
        MetricField::ReadIops,
        MetricField::WriteIops,
        MetricField::InsertRate,
        MetricField::OpsRate,
        MetricField::P50Latency,
        MetricField::P99Latency,
    ];

    pub fn kind(self) -> MetricKind {
        match self {
            MetricField::SpdkBandwidth | MetricField::ReadBandwidth | MetricField::WriteBandwidth => {
                MetricKind::Bandwidth
            }
            MetricField::ReadIops | MetricField::WriteIops => MetricKind::Iops,
            MetricField::SpdkIops => MetricKind::Rate,
            MetricField::SpdkLatency | MetricField::P50Latency | MetricField::P99Latency => {
                MetricKind::Latency
            }
            MetricField::InsertRate | MetricField::OpsRate => MetricKind::Custom,
        }
    }

    /// Unit the record stores this field in.
    pub fn canonical_unit(self) -> Unit {
        match self.kind() {
            MetricKind::Bandwidth => Unit::MibPerSec,
            MetricKind::Iops | MetricKind::Rate => Unit::Iops,
            MetricKind::Latency => Unit::Microseconds,
            MetricKind::Custom => match self {
                MetricField::InsertRate => Unit::RowsPerSec,
                _ => Unit::OpsPerSec,
            },
        }
    }

    /// Whether a sample in `unit` can be stored in this field. `MB/s` is
    /// accepted for bandwidth: summary lines print mebibytes under that label.
    pub fn accepts(self, unit: Unit) -> bool {
        unit == self.canonical_unit()
            || (unit == Unit::MbPerSec && self.kind() == MetricKind::Bandwidth)
    }

    /// Column name used in reports and JSON output.
    pub fn column(self) -> &'static str {
        match self {
            MetricField::SpdkIops => "spdk_iops",
            MetricField::SpdkBandwidth => "spdk_mib_s",
            MetricField::SpdkLatency => "spdk_lat_us",
            MetricField::ReadBandwidth => "read_bw_mib_s",
            MetricField::WriteBandwidth => "write_bw_mib_s",
            MetricField::ReadIops => "read_iops",
            MetricField::WriteIops => "write_iops",
            MetricField::InsertRate => "insert_rate",
            MetricField::OpsRate => "ops_rate",
            MetricField::P50Latency => "p50_us",
            MetricField::P99Latency => "p99_us",
        }
    }
}

impl std::fmt::Display for MetricField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// One typed numeric observation produced by a single extractor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSample {
    pub field: MetricField,
    pub value: f64,
    pub unit: Unit,
    /// Extractor that produced the sample.
    pub source: ExtractorKind,
}

impl MetricSample {
    pub fn new(field: MetricField, value: f64, unit: Unit, source: ExtractorKind) -> Self {
        Self {
            field,
            value,
            unit,
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Suite classification
// ---------------------------------------------------------------------------

/// Reporting group for a test, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suite {
    Storage,
    Memory,
    /// Fixed fallback for names matching neither keyword list.
    Other,
}

const MEMORY_KEYWORDS: &[&str] = &["dimm", "memory"];
const STORAGE_KEYWORDS: &[&str] = &["storage", "nvme", "spdk", "fio"];

impl Suite {
    /// Classify a test by case-insensitive keyword match. Memory keywords are
    /// checked before storage keywords.
    pub fn classify(test_name: &str) -> Self {
        let low = test_name.to_lowercase();
        if MEMORY_KEYWORDS.iter().any(|k| low.contains(k)) {
            Suite::Memory
        } else if STORAGE_KEYWORDS.iter().any(|k| low.contains(k)) {
            Suite::Storage
        } else {
            Suite::Other
        }
    }
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suite::Storage => write!(f, "storage"),
            Suite::Memory => write!(f, "memory"),
            Suite::Other => write!(f, "other"),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Identity, status and timing of one executed test, as read from the
/// results index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestIdentity {
    pub job_id: String,
    pub job_dir: String,
    pub test_name: String,
    pub status: String,
    pub duration_s: f64,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl TestIdentity {
    pub fn new(job_id: impl Into<String>, test_name: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            job_dir: String::new(),
            test_name: test_name.into(),
            status: "UNKNOWN".to_string(),
            duration_s: 0.0,
            start_time: None,
            end_time: None,
        }
    }
}

/// Every metric a record can carry. A field is `None` when no extractor
/// produced a sample for it, never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricSet {
    pub spdk_iops: Option<f64>,
    pub spdk_mib_s: Option<f64>,
    pub spdk_lat_us: Option<f64>,
    pub read_bw_mib_s: Option<f64>,
    pub write_bw_mib_s: Option<f64>,
    pub read_iops: Option<f64>,
    pub write_iops: Option<f64>,
    pub insert_rate: Option<f64>,
    pub ops_rate: Option<f64>,
    pub p50_us: Option<f64>,
    pub p99_us: Option<f64>,
}

impl MetricSet {
    fn slot(&mut self, field: MetricField) -> &mut Option<f64> {
        match field {
            MetricField::SpdkIops => &mut self.spdk_iops,
            MetricField::SpdkBandwidth => &mut self.spdk_mib_s,
            MetricField::SpdkLatency => &mut self.spdk_lat_us,
            MetricField::ReadBandwidth => &mut self.read_bw_mib_s,
            MetricField::WriteBandwidth => &mut self.write_bw_mib_s,
            MetricField::ReadIops => &mut self.read_iops,
            MetricField::WriteIops => &mut self.write_iops,
            MetricField::InsertRate => &mut self.insert_rate,
            MetricField::OpsRate => &mut self.ops_rate,
            MetricField::P50Latency => &mut self.p50_us,
            MetricField::P99Latency => &mut self.p99_us,
        }
    }

    pub fn set(&mut self, field: MetricField, value: f64) {
        *self.slot(field) = Some(value);
    }

    pub fn get(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::SpdkIops => self.spdk_iops,
            MetricField::SpdkBandwidth => self.spdk_mib_s,
            MetricField::SpdkLatency => self.spdk_lat_us,
            MetricField::ReadBandwidth => self.read_bw_mib_s,
            MetricField::WriteBandwidth => self.write_bw_mib_s,
            MetricField::ReadIops => self.read_iops,
            MetricField::WriteIops => self.write_iops,
            MetricField::InsertRate => self.insert_rate,
            MetricField::OpsRate => self.ops_rate,
            MetricField::P50Latency => self.p50_us,
            MetricField::P99Latency => self.p99_us,
        }
    }

    pub fn is_empty(&self) -> bool {
        MetricField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// The normalised per-test output of the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRecord {
    #[serde(flatten)]
    pub identity: TestIdentity,
    #[serde(flatten)]
    pub metrics: MetricSet,
}

impl TestRecord {
    /// A record with identity only and every metric absent.
    pub fn bare(identity: TestIdentity) -> Self {
        Self {
            identity,
            metrics: MetricSet::default(),
        }
    }

    /// Reporting group, recomputed from the test name on every call.
    pub fn suite(&self) -> Suite {
        Suite::classify(&self.identity.test_name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
