//! fio JSON written to a file and referenced from the filesystem results
//! block:
//!
//! ```text
//! Filesystem test results: {
//!   "fio_file_verify": {"status": "PASS", "errors": 0, "json": "/tmp/fio_verify.json"}
//! }
//! ```
//!
//! The referenced document is summed by [`aggregate::from_object`]. A missing
//! or unreadable file yields no samples.

use serde_json::Value;

use super::aggregate;
use super::{ExtractContext, ExtractorKind};
use crate::types::MetricSample;

pub fn extract(ctx: &ExtractContext<'_>) -> Vec<MetricSample> {
    let Some(block) = ctx.block(&ctx.config.markers.filesystem) else {
        return Vec::new();
    };
    let Some(path) = block
        .object
        .get("fio_file_verify")
        .and_then(|v| v.get("json"))
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
    else {
        return Vec::new();
    };

    let path = ctx.resolve(path);
    let text = match std::fs::read(&path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "referenced fio JSON unreadable");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(obj)) => aggregate::from_object(&obj, ExtractorKind::FileRef),
        _ => {
            tracing::debug!(path = %path.display(), "referenced fio JSON did not parse");
            Vec::new()
        }
    }
}
