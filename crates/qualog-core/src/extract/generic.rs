//! Generic micro-benchmark summaries, as printed by stress-ng:
//!
//! ```text
//! stress-ng: metrc: [4242] iomix  812345  60.00  12.31  40.02  13539.08  15523.11
//! ```
//!
//! A line qualifies when it contains `metrc:` and the configured marker and
//! ends in a number. When several numbers are present the configured
//! [`NumberRule`] picks one: by default the second-to-last (bogo ops/s over
//! real time) instead of the last (over usr+sys time). That column choice
//! follows the tool's current layout and breaks if the layout changes. The
//! first qualifying line wins.

use std::sync::LazyLock;

use regex::Regex;

use super::{parse_number, ExtractContext, ExtractorKind};
use crate::config::NumberRule;
use crate::types::{MetricField, MetricSample, Unit};

const METRIC_TAG: &str = "metrc:";

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*\.?[0-9]+").expect("valid regex"));

static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*\.?[0-9]+\s*$").expect("valid regex"));

pub fn extract(ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
    let marker = ctx.config.extract.generic_marker.as_str();
    if marker.is_empty() {
        return Vec::new();
    }
    let rule = ctx.config.extract.generic_number_rule;

    ctx.lines
        .iter()
        .find(|line| line.contains(METRIC_TAG) && line.contains(marker) && TRAILING_NUMBER.is_match(line))
        .and_then(|line| pick(line, rule))
        .map(|value| {
            vec![MetricSample::new(
                MetricField::OpsRate,
                value,
                Unit::OpsPerSec,
                ExtractorKind::Generic,
            )]
        })
        .unwrap_or_default()
}

fn pick(line: &str, rule: NumberRule) -> Option<f64> {
    let numbers: Vec<&str> = NUMBER.find_iter(line).map(|m| m.as_str()).collect();
    let token = match (rule, numbers.len()) {
        (_, 0) => return None,
        (NumberRule::SecondToLast, n) if n >= 2 => numbers[n - 2],
        (_, n) => numbers[n - 1],
    };
    parse_number(token)
}
