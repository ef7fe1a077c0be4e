//! Types shared across the recommendation pipeline.

use catalog::{Movie, MovieId};
use serde::Serialize;
use std::collections::HashSet;
use synth::UserId;

/// A movie under consideration by the filter pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub movie_id: MovieId,
    /// Ranking signal, the catalog base rating for both recommenders
    pub score: f32,
}

impl Candidate {
    pub fn new(movie_id: MovieId, score: f32) -> Self {
        Self { movie_id, score }
    }
}

/// Everything the filters need to know about the viewer.
///
/// Built once per request from the interaction table; for movie-based
/// similarity a synthetic profile anchored on a single movie is used.
#[derive(Debug, Clone)]
pub struct ViewerProfile {
    pub user_id: UserId,
    pub watched: HashSet<MovieId>,
    pub favorite_genre: Option<String>,
    pub avg_rating: f32,
}

impl ViewerProfile {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            watched: HashSet::new(),
            favorite_genre: None,
            avg_rating: 0.0,
        }
    }
}

/// One recommended movie, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: String,
    pub base_rating: f32,
}

impl Recommendation {
    pub(crate) fn from_movie(movie: &Movie) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title.clone(),
            genres: movie.genre_label(),
            base_rating: movie.base_rating,
        }
    }
}
