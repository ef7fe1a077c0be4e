//! Chains filters into a sequential pipeline.

use crate::traits::Filter;
use crate::types::{Candidate, ViewerProfile};
use anyhow::Result;
use tracing::debug;

/// Applies a list of filters in order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyWatchedFilter)
///     .add_filter(GenreMatchFilter::new(catalog.clone()));
/// let survivors = pipeline.apply(candidates, &profile)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the end of the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Run every filter in sequence, logging in/out counts.
    pub fn apply(
        &self,
        candidates: Vec<Candidate>,
        profile: &ViewerProfile,
    ) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, profile)?;
            debug!(
                filter = filter.name(),
                before,
                after = current.len(),
                "filter applied"
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
