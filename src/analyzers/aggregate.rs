use tracing::warn;

use crate::analyzers::category::classify;
use crate::analyzers::types::{CategoryCounts, Label};
use crate::parser::Record;

/// Classifies every record in order.
///
/// The first invalid floor count ends classification for the whole batch:
/// the labels gathered so far are kept and a single [`Label::Error`] is
/// appended. Which record failed, and whether any later ones would have, is
/// not reported in the result.
pub fn classify_all(records: &[Record]) -> Vec<Label> {
    let mut labels = Vec::with_capacity(records.len());

    for record in records {
        match classify(record.floor_count) {
            Ok(category) => labels.push(Label::from(category)),
            Err(e) => {
                warn!(
                    address = %record.address,
                    error = %e,
                    classified = labels.len(),
                    "Classification aborted for remaining records"
                );
                labels.push(Label::Error);
                break;
            }
        }
    }

    labels
}

/// Tallies how often each label occurs.
pub fn count_by_category(labels: &[Label]) -> CategoryCounts {
    labels.iter().copied().collect()
}
