//! qualog-report — CSV and plain-text renderings of [`TestRecord`]s.
//!
//! Records are split by [`Suite`]; each of the storage and memory suites gets
//! a `<suite>_report.csv` and a `<suite>_report.txt`. Absent metrics render
//! as an empty CSV cell and as `-` in text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use qualog_core::{Suite, TestRecord};

pub mod csv;
pub mod text;

/// Suites that get a report, with their text titles.
pub const REPORTED_SUITES: [(Suite, &str); 2] = [
    (Suite::Storage, "Storage Test Report"),
    (Suite::Memory, "Memory (DIMM) Test Report"),
];

/// Write every report into `out_dir`, creating it if needed. Returns the
/// paths written.
pub fn write_reports(
    out_dir: &Path,
    records: &[TestRecord],
    generated: DateTime<Local>,
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    for (suite, title) in REPORTED_SUITES {
        let rows: Vec<&TestRecord> = records.iter().filter(|r| r.suite() == suite).collect();

        let csv_path = out_dir.join(format!("{suite}_report.csv"));
        let mut out = BufWriter::new(File::create(&csv_path)?);
        csv::write_csv(&mut out, &rows)?;
        out.flush()?;
        written.push(csv_path);

        let txt_path = out_dir.join(format!("{suite}_report.txt"));
        let mut out = BufWriter::new(File::create(&txt_path)?);
        text::write_text(&mut out, &rows, title, generated)?;
        out.flush()?;
        written.push(txt_path);

        tracing::debug!(%suite, rows = rows.len(), "wrote reports");
    }
    Ok(written)
}
