//! Temporal viewing trends.

use serde::Serialize;
use std::collections::BTreeMap;
use synth::Interaction;

/// View count for one calendar month
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyViews {
    /// "YYYY-MM" key; lexicographic order is chronological order
    pub month: String,
    pub views: usize,
}

/// Count views per calendar month, in chronological order.
pub fn monthly_views(interactions: &[Interaction]) -> Vec<MonthlyViews> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for it in interactions {
        let key = it.watch_date.format("%Y-%m").to_string();
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(month, views)| MonthlyViews { month, views })
        .collect()
}
