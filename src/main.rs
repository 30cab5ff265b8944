use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use qualog_core::config::Config;
use qualog_jobs::JobSelection;

#[derive(Parser)]
#[command(name = "qualog", about = "Extract benchmark metrics from qualification test logs")]
struct Cli {
    /// Specific job directory to parse.
    #[arg(long)]
    job_dir: Option<PathBuf>,

    /// Root directory containing job-* directories.
    #[arg(long)]
    job_root: Option<PathBuf>,

    /// Number of most recent jobs to scan (ignored with --job-dir).
    #[arg(long)]
    jobs: Option<usize>,

    /// Ignore jobs with fewer tests than this (only when scanning recent jobs).
    #[arg(long)]
    min_tests: Option<usize>,

    /// Output directory for reports.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Config file to layer over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON record per line instead of writing reports.
    #[arg(long)]
    json: bool,

    /// Write debug logs to /tmp/qualog-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(root) = cli.job_root {
        config.jobs.root = root;
    }
    if let Some(n) = cli.jobs {
        config.jobs.recent = n;
    }
    if let Some(n) = cli.min_tests {
        config.jobs.min_tests = n;
    }
    if let Some(dir) = cli.out_dir {
        config.report.out_dir = dir;
    }

    let selection = match cli.job_dir {
        Some(dir) => JobSelection::Explicit(dir),
        None => JobSelection::Recent,
    };
    let records = qualog_jobs::collect_records(&selection, &config)?;

    if cli.json {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for record in &records {
            let line = serde_json::to_string(&JsonRecord {
                suite: record.suite(),
                record,
            })?;
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    qualog_report::write_reports(&config.report.out_dir, &records, chrono::Local::now())?;
    let shown = std::fs::canonicalize(&config.report.out_dir).unwrap_or(config.report.out_dir);
    println!("Wrote reports to: {}", shown.display());
    Ok(())
}

#[derive(serde::Serialize)]
struct JsonRecord<'a> {
    suite: qualog_core::Suite,
    #[serde(flatten)]
    record: &'a qualog_core::TestRecord,
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/qualog-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter)
            .init();
        tracing::info!("qualog debug log started: tail -f /tmp/qualog-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
    Ok(())
}
