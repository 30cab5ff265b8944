//! Rate pairs: `✓ SQLite insert rate: 357858.31 rows/s, select: 65.97 ops/s`.

use std::sync::LazyLock;

use regex::Regex;

use super::{parse_number, ExtractContext, ExtractorKind};
use crate::types::{MetricField, MetricSample, Unit};

static RATE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)✓\s*SQLite\s*insert\s*rate:\s*([0-9]*\.?[0-9]+)\s*rows/s,\s*select:\s*([0-9]*\.?[0-9]+)\s*ops/s",
    )
    .expect("valid regex")
});

/// Insert and select rates from the last matching line.
pub fn extract(ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
    let last = ctx
        .lines
        .iter()
        .filter_map(|line| {
            let caps = RATE_PAIR.captures(line)?;
            Some((parse_number(&caps[1])?, parse_number(&caps[2])?))
        })
        .last();

    let Some((insert, select)) = last else {
        return Vec::new();
    };
    vec![
        MetricSample::new(MetricField::InsertRate, insert, Unit::RowsPerSec, ExtractorKind::RatePair),
        MetricSample::new(MetricField::OpsRate, select, Unit::OpsPerSec, ExtractorKind::RatePair),
    ]
}
