//! Drops candidates scoring below a minimum.

use crate::traits::Filter;
use crate::types::{Candidate, ViewerProfile};
use anyhow::Result;

/// Keeps candidates whose score is at least `min_score`.
///
/// Used by the similarity recommender with a floor of the anchor movie's
/// base rating minus half a point.
pub struct RatingFloorFilter {
    min_score: f32,
}

impl RatingFloorFilter {
    pub fn new(min_score: f32) -> Self {
        Self { min_score }
    }
}

impl Filter for RatingFloorFilter {
    fn name(&self) -> &str {
        "RatingFloorFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        _profile: &ViewerProfile,
    ) -> Result<Vec<Candidate>> {
        Ok(candidates
            .into_iter()
            .filter(|c| c.score >= self.min_score)
            .collect())
    }
}
