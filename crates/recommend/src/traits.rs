//! Core trait for the filtering pipeline.

use crate::types::{Candidate, ViewerProfile};
use anyhow::Result;

/// A composable filtering step over candidate movies.
///
/// Filters take ownership of the candidate vector and return the survivors,
/// so chaining steps never clones. `Send + Sync` keeps them usable behind
/// shared references.
pub trait Filter: Send + Sync {
    /// Name used in pipeline debug logs
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    fn apply(&self, candidates: Vec<Candidate>, profile: &ViewerProfile)
    -> Result<Vec<Candidate>>;
}
