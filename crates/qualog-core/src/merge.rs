//! Record merger: folds extractor samples into a [`TestRecord`].
//!
//! Samples are grouped by (extractor, field) and each group is reduced with
//! the extractor's [`Reduction`]. Groups are then written in extractor
//! precedence order, so when two extractors target the same field the later
//! one in [`ExtractorKind::ORDER`] wins. Fields with no sample stay `None`.
//! No unit conversion happens here; a sample whose unit the field does not
//! accept is dropped.

use crate::extract::{ExtractorKind, Reduction};
use crate::types::{MetricField, MetricSample, MetricSet, TestIdentity, TestRecord};

pub fn merge(identity: TestIdentity, samples: &[MetricSample]) -> TestRecord {
    let mut record = TestRecord::bare(identity);
    record.metrics = merge_metrics(samples);
    record
}

pub fn merge_metrics(samples: &[MetricSample]) -> MetricSet {
    let mut groups: Vec<Group> = Vec::new();
    for sample in samples {
        if !sample.field.accepts(sample.unit) {
            tracing::debug!(
                field = %sample.field,
                unit = %sample.unit,
                source = %sample.source,
                "dropping sample with inconsistent unit"
            );
            continue;
        }
        match groups
            .iter_mut()
            .find(|g| g.source == sample.source && g.field == sample.field)
        {
            Some(group) => group.values.push(sample.value),
            None => groups.push(Group {
                source: sample.source,
                field: sample.field,
                values: vec![sample.value],
            }),
        }
    }

    // Stable: equal precedence keeps sample order.
    groups.sort_by_key(|g| g.source.precedence());

    let mut metrics = MetricSet::default();
    for group in &groups {
        if let Some(value) = group.reduce() {
            metrics.set(group.field, value);
        }
    }
    metrics
}

struct Group {
    source: ExtractorKind,
    field: MetricField,
    values: Vec<f64>,
}

impl Group {
    fn reduce(&self) -> Option<f64> {
        match self.source.reduction() {
            Reduction::Last => self.values.last().copied(),
            Reduction::Mean if self.values.is_empty() => None,
            Reduction::Mean => Some(self.values.iter().sum::<f64>() / self.values.len() as f64),
        }
    }
}
