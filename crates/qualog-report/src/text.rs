//! Fixed-width plain-text summary.

use std::collections::BTreeMap;
use std::io::{self, Write};

use chrono::{DateTime, Local};
use qualog_core::TestRecord;

const HEADER: &str = "STATUS  DUR(s)  SPDK_IOPS  SPDK_MiB/s  SPDK_lat(us)  \
                      RD_BW(MiB/s)  WR_BW(MiB/s)  RD_IOPS  WR_IOPS  \
                      INSERT/s   OPS/s  P50(us)  P99(us)  TEST";

/// `-` for an absent value, otherwise fixed precision.
pub fn fmt_metric(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => "-".to_string(),
    }
}

pub fn write_text<W: Write>(
    out: &mut W,
    records: &[&TestRecord],
    title: &str,
    generated: DateTime<Local>,
) -> io::Result<()> {
    let mut status_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *status_counts.entry(r.identity.status.as_str()).or_default() += 1;
    }

    writeln!(out, "{title}")?;
    writeln!(out, "Generated: {}", generated.format("%Y-%m-%dT%H:%M:%S"))?;
    writeln!(out, "Total tests: {}", records.len())?;
    if !status_counts.is_empty() {
        let counts: Vec<String> = status_counts.iter().map(|(k, v)| format!("{k}={v}")).collect();
        writeln!(out, "Status counts: {}", counts.join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{}", "-".repeat(HEADER.len()))?;

    for r in records {
        let m = &r.metrics;
        writeln!(
            out,
            "{:<6} {:>7.3} {:>10} {:>11} {:>13} {:>13} {:>13} {:>8} {:>8} {:>10} {:>7} {:>8} {:>8}  {}",
            r.identity.status,
            r.identity.duration_s,
            fmt_metric(m.spdk_iops, 2),
            fmt_metric(m.spdk_mib_s, 2),
            fmt_metric(m.spdk_lat_us, 2),
            fmt_metric(m.read_bw_mib_s, 2),
            fmt_metric(m.write_bw_mib_s, 2),
            fmt_metric(m.read_iops, 0),
            fmt_metric(m.write_iops, 0),
            fmt_metric(m.insert_rate, 2),
            fmt_metric(m.ops_rate, 2),
            fmt_metric(m.p50_us, 3),
            fmt_metric(m.p99_us, 3),
            r.identity.test_name,
        )?;
    }
    Ok(())
}
