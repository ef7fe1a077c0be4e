//! Keeps only movies matching the viewer's favorite genre.

use crate::traits::Filter;
use crate::types::{Candidate, ViewerProfile};
use anyhow::Result;
use catalog::Catalog;
use std::sync::Arc;

/// Keeps candidates whose movie matches `profile.favorite_genre`
/// (case-insensitive, substring semantics of [`catalog::Movie::matches_genre`]).
///
/// A profile without a favorite genre passes everything through unchanged.
pub struct GenreMatchFilter {
    catalog: Arc<Catalog>,
}

impl GenreMatchFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for GenreMatchFilter {
    fn name(&self) -> &str {
        "GenreMatchFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        profile: &ViewerProfile,
    ) -> Result<Vec<Candidate>> {
        let Some(favorite) = profile.favorite_genre.as_deref() else {
            return Ok(candidates);
        };

        Ok(candidates
            .into_iter()
            .filter(|c| {
                self.catalog
                    .get(c.movie_id)
                    .is_some_and(|m| m.matches_genre(favorite))
            })
            .collect())
    }
}
