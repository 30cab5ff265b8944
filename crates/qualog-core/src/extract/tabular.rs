//! SPDK perf rows keyed by a PCIe address:
//!
//! ```text
//! PCIE (0000:5e:00.0) NSID 1 from core  0:   20706.96    2588.37    6181.52 ...
//! ```
//!
//! The three leading columns are IOPS, MiB/s and average latency (us). The
//! last matching row wins.

use std::sync::LazyLock;

use regex::Regex;

use super::{parse_number, ExtractContext, ExtractorKind};
use crate::types::{MetricField, MetricSample, Unit};

static PERF_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)PCIE\s*\([0-9a-fA-F:.]+\)\s*NSID\s*\d+\s*from\s*core\s*\d+\s*:\s*([0-9]*\.?[0-9]+)\s+([0-9]*\.?[0-9]+)\s+([0-9]*\.?[0-9]+)",
    )
    .expect("valid regex")
});

pub fn extract(ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
    let last = ctx
        .lines
        .iter()
        .filter_map(|line| {
            let caps = PERF_ROW.captures(line)?;
            Some((
                parse_number(&caps[1])?,
                parse_number(&caps[2])?,
                parse_number(&caps[3])?,
            ))
        })
        .last();

    let Some((iops, mib_s, lat_us)) = last else {
        return Vec::new();
    };
    vec![
        MetricSample::new(MetricField::SpdkIops, iops, Unit::Iops, ExtractorKind::Tabular),
        MetricSample::new(MetricField::SpdkBandwidth, mib_s, Unit::MibPerSec, ExtractorKind::Tabular),
        MetricSample::new(MetricField::SpdkLatency, lat_us, Unit::Microseconds, ExtractorKind::Tabular),
    ]
}
