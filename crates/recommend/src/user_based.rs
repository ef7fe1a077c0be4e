//! User-based recommendations: favorite genre, minus watched, by rating.

use crate::filters::{AlreadyWatchedFilter, GenreMatchFilter};
use crate::pipeline::FilterPipeline;
use crate::profile::build_viewer_profile;
use crate::types::{Candidate, Recommendation};
use anyhow::Result;
use catalog::Catalog;
use std::sync::Arc;
use synth::{Interaction, UserId};
use tracing::instrument;

/// Recommendations for one user plus the genre they were derived from
#[derive(Debug, Clone)]
pub struct UserRecommendations {
    pub user_id: UserId,
    pub favorite_genre: Option<String>,
    pub items: Vec<Recommendation>,
}

/// Recommend up to `limit` unwatched catalog movies from the user's
/// favorite genre, best base rating first.
#[instrument(skip(catalog, interactions))]
pub fn recommend_for_user(
    catalog: Arc<Catalog>,
    interactions: &[Interaction],
    user_id: &str,
    limit: usize,
) -> Result<UserRecommendations> {
    let profile = build_viewer_profile(interactions, user_id)?;

    let candidates: Vec<Candidate> = catalog
        .movies()
        .iter()
        .map(|m| Candidate::new(m.id, m.base_rating))
        .collect();

    let pipeline = FilterPipeline::new()
        .add_filter(AlreadyWatchedFilter)
        .add_filter(GenreMatchFilter::new(Arc::clone(&catalog)));
    let survivors = pipeline.apply(candidates, &profile)?;

    let items = rank_and_take(&catalog, survivors, limit);

    Ok(UserRecommendations {
        user_id: profile.user_id,
        favorite_genre: profile.favorite_genre,
        items,
    })
}

/// Sort candidates by score descending (title ascending on ties) and
/// resolve the top `limit` into display records.
pub(crate) fn rank_and_take(
    catalog: &Catalog,
    mut candidates: Vec<Candidate>,
    limit: usize,
) -> Vec<Recommendation> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                let ta = catalog.get(a.movie_id).map(|m| m.title.as_str()).unwrap_or("");
                let tb = catalog.get(b.movie_id).map(|m| m.title.as_str()).unwrap_or("");
                ta.cmp(tb)
            })
    });
    candidates
        .into_iter()
        .filter_map(|c| catalog.get(c.movie_id).map(Recommendation::from_movie))
        .take(limit)
        .collect()
}
