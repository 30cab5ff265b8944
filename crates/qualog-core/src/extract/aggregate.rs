//! fio JSON aggregation.
//!
//! fio's `--output-format=json` document carries a `jobs` list whose entries
//! hold `read`/`write` objects with `bw` (KiB/s) and `iops`. Bandwidth and
//! IOPS are summed per direction across jobs; bandwidth is converted to
//! MiB/s. A direction whose sum is zero is omitted, so an idle direction and
//! an unmeasured one look the same.

use serde_json::{Map, Value};

use super::{json_number, ExtractContext, ExtractorKind};
use crate::types::{MetricField, MetricSample, Unit};

const KIB_PER_MIB: f64 = 1024.0;

/// Metrics from the last stream object that has a `jobs` key.
pub fn extract(ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
    ctx.stream_objects()
        .iter()
        .rev()
        .find(|obj| obj.contains_key("jobs"))
        .map(|obj| from_object(obj, ExtractorKind::Aggregate))
        .unwrap_or_default()
}

/// Sum a fio JSON document. Shared with the file-reference extractor.
pub fn from_object(obj: &Map<String, Value>, source: ExtractorKind) -> Vec<MetricSample> {
    let Some(jobs) = obj.get("jobs").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut read = Totals::default();
    let mut write = Totals::default();
    for job in jobs.iter().filter_map(Value::as_object) {
        read.add(job.get("read"));
        write.add(job.get("write"));
    }

    let mut samples = Vec::new();
    let mut push = |field, value: f64, unit| {
        if value > 0.0 {
            samples.push(MetricSample::new(field, value, unit, source));
        }
    };
    push(MetricField::ReadBandwidth, read.bw_kib / KIB_PER_MIB, Unit::MibPerSec);
    push(MetricField::WriteBandwidth, write.bw_kib / KIB_PER_MIB, Unit::MibPerSec);
    push(MetricField::ReadIops, read.iops, Unit::Iops);
    push(MetricField::WriteIops, write.iops, Unit::Iops);
    samples
}

#[derive(Debug, Default)]
struct Totals {
    bw_kib: f64,
    iops: f64,
}

impl Totals {
    fn add(&mut self, direction: Option<&Value>) {
        let Some(dir) = direction.and_then(Value::as_object) else {
            return;
        };
        self.bw_kib += dir.get("bw").and_then(json_number).unwrap_or(0.0);
        self.iops += dir.get("iops").and_then(json_number).unwrap_or(0.0);
    }
}
