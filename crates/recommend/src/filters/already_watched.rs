//! Removes movies already present in the viewer's watched set.
//!
//! Always the first filter in a pipeline: recommending something the user
//! has already seen is never useful.

use crate::traits::Filter;
use crate::types::{Candidate, ViewerProfile};
use anyhow::Result;

/// Drops candidates found in `profile.watched` (HashSet, O(1) lookups).
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        profile: &ViewerProfile,
    ) -> Result<Vec<Candidate>> {
        Ok(candidates
            .into_iter()
            .filter(|c| !profile.watched.contains(&c.movie_id))
            .collect())
    }
}
