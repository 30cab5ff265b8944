//! Metric assertion macros for qualog harnesses.
//!
//! These add context-rich failure messages that say which record field was
//! wrong and what the rest of the record looked like.

use qualog::TestRecord;

/// Assert that a record field holds a value within `1e-6` of `expected`.
///
/// ```rust
/// assert_metric!(record, MetricField::ReadBandwidth, 600.0);
/// ```
#[macro_export]
macro_rules! assert_metric {
    ($record:expr, $field:expr, $expected:expr) => {{
        let record: &qualog::TestRecord = &$record;
        let field: qualog::MetricField = $field;
        let expected: f64 = $expected;
        match record.metrics.get(field) {
            Some(actual) if (actual - expected).abs() < 1e-6 => {}
            Some(actual) => panic!(
                "assert_metric! failed:\n  field:    {}\n  expected: {}\n  actual:   {}\n  record: {:?}",
                field, expected, actual, record.metrics
            ),
            None => panic!(
                "assert_metric! failed: field {} is absent.\n  record: {:?}",
                field, record.metrics
            ),
        }
    }};
}

/// Assert that a record field is absent (not zero).
#[macro_export]
macro_rules! assert_absent {
    ($record:expr, $field:expr) => {{
        let record: &qualog::TestRecord = &$record;
        let field: qualog::MetricField = $field;
        if let Some(actual) = record.metrics.get(field) {
            panic!(
                "assert_absent! failed: field {} = {} but should be absent",
                field, actual
            );
        }
    }};
}

/// Assert that every metric of a record is absent.
pub fn assert_no_metrics(record: &TestRecord) {
    assert!(
        record.metrics.is_empty(),
        "expected no metrics for {:?}, got {:?}",
        record.identity.test_name,
        record.metrics
    );
}
