//! Distribution aggregates for the dashboard charts

use std::collections::HashMap;

use shared::{AggregateEntry, RecordStore};

use crate::core::classifier::GenderClassifier;

/// Count records per team, most frequent first
pub fn team_aggregate(store: &RecordStore) -> Vec<AggregateEntry> {
    count_by(store.iter().map(|record| record.team.clone()))
}

/// Count records per inferred gender, most frequent first
///
/// Genders that classify nobody are omitted rather than reported as zero.
pub fn gender_aggregate(store: &RecordStore, classifier: &GenderClassifier) -> Vec<AggregateEntry> {
    count_by(
        store
            .iter()
            .map(|record| classifier.classify(&record.name).label().to_string()),
    )
}

/// Tally labels into entries ordered by descending count
///
/// Ties keep the order in which the labels first appeared in the data.
fn count_by(labels: impl Iterator<Item = String>) -> Vec<AggregateEntry> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for label in labels {
        if !counts.contains_key(&label) {
            order.push(label.clone());
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut entries: Vec<AggregateEntry> = order
        .into_iter()
        .map(|label| {
            let count = counts.remove(&label).unwrap_or(0);
            AggregateEntry::new(label, count)
        })
        .collect();

    // Stable sort, so equal counts stay in first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
