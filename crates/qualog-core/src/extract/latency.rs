//! Latency percentiles from the benchmark results block:
//!
//! ```text
//! Benchmark results: {
//!   "latency_percentiles": {"50th_us": 12.0, "99th_us": 55.0, "99.9th_us": 80.1}
//! }
//! ```
//!
//! Only p50 and p99 are taken. Non-numeric values (the suite writes `"FAIL"`
//! when fio output could not be parsed) are ignored.

use serde_json::Value;

use super::{ExtractContext, ExtractorKind};
use crate::types::{MetricField, MetricSample, Unit};

const PERCENTILES: [(&str, MetricField); 2] = [
    ("50th_us", MetricField::P50Latency),
    ("99th_us", MetricField::P99Latency),
];

pub fn extract(ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
    let Some(block) = ctx.block(&ctx.config.markers.benchmark) else {
        return Vec::new();
    };
    let Some(percentiles) = block
        .object
        .get("latency_percentiles")
        .and_then(Value::as_object)
    else {
        return Vec::new();
    };

    PERCENTILES
        .iter()
        .filter_map(|(key, field)| {
            let value = percentiles.get(*key)?.as_f64()?;
            Some(MetricSample::new(*field, value, Unit::Microseconds, ExtractorKind::Latency))
        })
        .collect()
}
