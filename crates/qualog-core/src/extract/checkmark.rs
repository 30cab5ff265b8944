//! Checkmark bandwidth summaries: `✓ Pass 2: 2165.8 MB/s, 202s`.
//!
//! One sample per pass. The test name decides the target: `read` wins over
//! `write`; a name with neither yields nothing. The merger averages passes.

use std::sync::LazyLock;

use regex::Regex;

use super::{parse_number, ExtractContext, ExtractorKind};
use crate::types::{MetricField, MetricSample, Unit};

static PASS_BW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)✓\s*Pass\s*\d+\s*:\s*([0-9]*\.?[0-9]+)\s*(MiB/s|MB/s)").expect("valid regex")
});

const BYTES_PER_MB: f64 = 1_000_000.0;
const BYTES_PER_MIB: f64 = 1_048_576.0;

pub fn extract(ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
    let name = ctx.test_name.to_lowercase();
    let field = if name.contains("read") {
        MetricField::ReadBandwidth
    } else if name.contains("write") {
        MetricField::WriteBandwidth
    } else {
        return Vec::new();
    };

    ctx.lines
        .iter()
        .filter_map(|line| PASS_BW.captures(line))
        .filter_map(|caps| {
            let value = parse_number(&caps[1])?;
            let unit = Unit::from_label(&caps[2]).ok()?;
            Some(to_sample(field, value, unit, ctx.config.extract.decimal_megabytes))
        })
        .collect()
}

/// `MB/s` is a label for mebibytes unless decimal megabytes are configured.
fn to_sample(field: MetricField, value: f64, unit: Unit, decimal_megabytes: bool) -> MetricSample {
    let (value, unit) = match unit {
        Unit::MbPerSec if decimal_megabytes => (value * BYTES_PER_MB / BYTES_PER_MIB, Unit::MibPerSec),
        other => (value, other),
    };
    MetricSample::new(field, value, unit, ExtractorKind::Checkmark)
}
