//! Extraction pipeline: one log in, one [`TestRecord`] out.
//!
//! ```text
//! log text ──► normalizer ──┬──► stream reconstructor ──► JSON collector ──┐
//!                           └──► embedded block extractor ─────────────────┤
//!                                                                           ▼
//!                                   extractors (fixed order) ──► merger ──► TestRecord
//! ```
//!
//! Each call is independent; there is no state shared between tests.

use std::path::Path;

use crate::config::Config;
use crate::extract::{run_all, ExtractContext};
use crate::merge::merge;
use crate::types::{MetricSample, TestIdentity, TestRecord};

/// Run every extractor over `log_text` for `test_name`.
pub fn extract_samples(
    test_name: &str,
    log_text: &str,
    config: &Config,
    base_dir: Option<&Path>,
) -> Vec<MetricSample> {
    let mut ctx = ExtractContext::new(test_name, log_text, config);
    if let Some(dir) = base_dir {
        ctx = ctx.with_base_dir(dir);
    }
    run_all(&ctx)
}

/// Build the record for one test. A test without a log keeps its identity
/// and has every metric absent.
pub fn build_record(
    identity: TestIdentity,
    log_text: Option<&str>,
    config: &Config,
    base_dir: Option<&Path>,
) -> TestRecord {
    let Some(text) = log_text else {
        return TestRecord::bare(identity);
    };
    let samples = extract_samples(&identity.test_name, text, config, base_dir);
    tracing::debug!(
        test = %identity.test_name,
        samples = samples.len(),
        "extracted metric samples"
    );
    merge(identity, &samples)
}
