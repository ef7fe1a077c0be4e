//! Per-movie aggregation and the weighted top-movies ranking.

use catalog::MovieId;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use synth::Interaction;
use tracing::debug;

/// Aggregated standing of one movie in the interaction table
#[derive(Debug, Clone, Serialize)]
pub struct MovieScore {
    pub movie_id: MovieId,
    pub title: String,
    pub avg_rating: f32,
    pub views: usize,
    /// Blend of quality and reach, rewards both high ratings and many views
    pub weighted_score: f32,
}

/// Weighted score: 70% average rating, 30% log-scaled view count.
fn weighted_score(avg_rating: f32, views: usize) -> f32 {
    avg_rating * 0.7 + (1.0 + views as f32).ln() * 0.3
}

/// Rank movies by weighted score, highest first, keeping the top `limit`.
pub fn top_movies(interactions: &[Interaction], limit: usize) -> Vec<MovieScore> {
    let mut acc: HashMap<MovieId, (String, f32, usize)> = HashMap::new();
    for it in interactions {
        let entry = acc
            .entry(it.movie_id)
            .or_insert_with(|| (it.title.clone(), 0.0, 0));
        entry.1 += it.rating;
        entry.2 += 1;
    }

    let mut scores: Vec<MovieScore> = acc
        .into_par_iter()
        .map(|(movie_id, (title, rating_sum, views))| {
            let avg_rating = rating_sum / views as f32;
            MovieScore {
                movie_id,
                title,
                avg_rating,
                views,
                weighted_score: weighted_score(avg_rating, views),
            }
        })
        .collect();
    debug!(movies = scores.len(), "aggregated per-movie scores");

    scores.sort_by(|a, b| {
        b.weighted_score
            .partial_cmp(&a.weighted_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.title.cmp(&b.title))
    });
    scores.truncate(limit);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::interaction;

    #[test]
    fn test_weighted_score_rewards_views() {
        // Same average, more views wins
        let few = weighted_score(4.0, 2);
        let many = weighted_score(4.0, 50);
        assert!(many > few);
    }

    #[test]
    fn test_top_movies_ranking() {
        let interactions = vec![
            interaction("U01", 1, "Popular", "Drama", 4.0, 100, "2024-01-05"),
            interaction("U02", 1, "Popular", "Drama", 4.0, 100, "2024-01-06"),
            interaction("U03", 1, "Popular", "Drama", 4.0, 100, "2024-01-07"),
            interaction("U01", 2, "Niche", "Drama", 4.0, 100, "2024-01-08"),
        ];
        let top = top_movies(&interactions, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].movie_id, 1);
        assert_eq!(top[0].views, 3);
        assert!(top[0].weighted_score > top[1].weighted_score);
    }

    #[test]
    fn test_limit_is_respected() {
        let interactions: Vec<_> = (0..20)
            .map(|i| {
                interaction(
                    "U01",
                    i,
                    &format!("M{i}"),
                    "Drama",
                    3.0 + (i % 3) as f32 / 2.0,
                    100,
                    "2024-01-05",
                )
            })
            .collect();
        assert_eq!(top_movies(&interactions, 5).len(), 5);
    }
}
