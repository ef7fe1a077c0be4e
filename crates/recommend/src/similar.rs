//! Movie-based similarity: same primary genre, comparable rating.

use crate::filters::{AlreadyWatchedFilter, GenreMatchFilter, RatingFloorFilter};
use crate::pipeline::FilterPipeline;
use crate::types::{Candidate, Recommendation, ViewerProfile};
use crate::user_based::rank_and_take;
use anyhow::{Result, anyhow};
use catalog::Catalog;
use std::sync::Arc;
use tracing::instrument;

/// How far below the anchor's base rating a similar movie may fall
const RATING_SLACK: f32 = 0.5;

/// The anchor movie and the movies judged similar to it
#[derive(Debug, Clone)]
pub struct SimilarMovies {
    pub anchor: Recommendation,
    pub items: Vec<Recommendation>,
}

/// Find movies similar to the first title matching `query`.
///
/// Similar means: shares the anchor's primary (first listed) genre, has a
/// base rating no more than half a point below the anchor's, and is not
/// the anchor itself. Sorted by base rating descending.
#[instrument(skip(catalog))]
pub fn similar_movies(catalog: Arc<Catalog>, query: &str, limit: usize) -> Result<SimilarMovies> {
    let anchor = catalog
        .find_by_title(query)
        .ok_or_else(|| anyhow!("no movie matching \"{}\"", query))?;
    let primary = anchor
        .primary_genre()
        .ok_or_else(|| anyhow!("movie \"{}\" has no genre", anchor.title))?;

    // Anchor-shaped profile: reuses the user pipeline machinery with the
    // anchor as the single "watched" movie and its genre as the favorite.
    let mut profile = ViewerProfile::new("anchor");
    profile.watched.insert(anchor.id);
    profile.favorite_genre = Some(primary.to_string());

    let candidates: Vec<Candidate> = catalog
        .movies()
        .iter()
        .map(|m| Candidate::new(m.id, m.base_rating))
        .collect();

    let pipeline = FilterPipeline::new()
        .add_filter(AlreadyWatchedFilter)
        .add_filter(GenreMatchFilter::new(Arc::clone(&catalog)))
        .add_filter(RatingFloorFilter::new(anchor.base_rating - RATING_SLACK));
    let survivors = pipeline.apply(candidates, &profile)?;

    let anchor = Recommendation::from_movie(anchor);
    let items = rank_and_take(&catalog, survivors, limit);

    Ok(SimilarMovies { anchor, items })
}
