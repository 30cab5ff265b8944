//! CSV rendering.

use std::io::{self, Write};

use qualog_core::{MetricField, TestRecord};

const IDENTITY_COLUMNS: [&str; 6] = ["job_id", "job_dir", "suite", "test_name", "status", "duration_s"];

pub fn header() -> String {
    IDENTITY_COLUMNS
        .iter()
        .copied()
        .chain(MetricField::ALL.iter().map(|f| f.column()))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn row(record: &TestRecord) -> String {
    let id = &record.identity;
    let mut cells = vec![
        escape(&id.job_id),
        escape(&id.job_dir),
        record.suite().to_string(),
        escape(&id.test_name),
        escape(&id.status),
        format!("{:.6}", id.duration_s),
    ];
    cells.extend(
        MetricField::ALL
            .iter()
            .map(|f| record.metrics.get(*f).map(|v| v.to_string()).unwrap_or_default()),
    );
    cells.join(",")
}

pub fn write_csv<W: Write>(out: &mut W, records: &[&TestRecord]) -> io::Result<()> {
    writeln!(out, "{}", header())?;
    for record in records {
        writeln!(out, "{}", row(record))?;
    }
    Ok(())
}

/// Quote a cell when it contains a delimiter, quote or line break.
fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
