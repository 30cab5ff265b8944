//! OLTP and mixed-workload IOPS summaries:
//!
//! ```text
//! ✓ OLTP: 213841 read IOPS, 53454 write IOPS
//! ✓ Mixed 50/50: 244878 R + 244900 W = 489778 total IOPS
//! ```
//!
//! Either shape yields a read/write pair. The last matching line wins.

use std::sync::LazyLock;

use regex::Regex;

use super::{parse_number, ExtractContext, ExtractorKind};
use crate::types::{MetricField, MetricSample, Unit};

static OLTP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)✓\s*OLTP:\s*([0-9]+)\s*read\s*IOPS,\s*([0-9]+)\s*write\s*IOPS")
        .expect("valid regex")
});

static MIXED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)✓\s*Mixed\s*50/50:\s*([0-9]+)\s*R\s*\+\s*([0-9]+)\s*W\s*=\s*([0-9]+)\s*total\s*IOPS")
        .expect("valid regex")
});

pub fn extract(ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
    let last = ctx
        .lines
        .iter()
        .filter_map(|line| pair(&OLTP, line).or_else(|| pair(&MIXED, line)))
        .last();

    match last {
        Some((read, write)) => vec![
            MetricSample::new(MetricField::ReadIops, read, Unit::Iops, ExtractorKind::MixedIops),
            MetricSample::new(MetricField::WriteIops, write, Unit::Iops, ExtractorKind::MixedIops),
        ],
        None => Vec::new(),
    }
}

fn pair(re: &Regex, line: &str) -> Option<(f64, f64)> {
    let caps = re.captures(line)?;
    Some((parse_number(&caps[1])?, parse_number(&caps[2])?))
}
