//! Genre-level aggregation.
//!
//! Multi-genre strings are split first, so an interaction with
//! "Action, Adventure" contributes one view to Action and one to Adventure.

use catalog::split_genres;
use serde::Serialize;
use std::collections::HashMap;
use synth::Interaction;

/// Popularity and quality of one genre across the interaction table
#[derive(Debug, Clone, Serialize)]
pub struct GenreStat {
    pub genre: String,
    /// Number of (interaction, genre) pairs after splitting
    pub views: usize,
    pub avg_rating: f32,
}

/// Aggregate views and average rating per split genre.
///
/// Sorted by views descending, then genre name ascending.
pub fn genre_popularity(interactions: &[Interaction]) -> Vec<GenreStat> {
    let mut acc: HashMap<String, (usize, f32)> = HashMap::new();

    for it in interactions {
        for genre in split_genres(&it.genres) {
            let entry = acc.entry(genre).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += it.rating;
        }
    }

    let mut stats: Vec<GenreStat> = acc
        .into_iter()
        .map(|(genre, (views, rating_sum))| GenreStat {
            genre,
            views,
            avg_rating: rating_sum / views as f32,
        })
        .collect();

    stats.sort_by(|a, b| b.views.cmp(&a.views).then_with(|| a.genre.cmp(&b.genre)));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::interaction;

    #[test]
    fn test_multi_genre_counts_each_split() {
        let interactions = vec![
            interaction("U01", 1, "A", "Action, Adventure", 4.0, 100, "2024-01-05"),
            interaction("U01", 2, "B", "Action", 2.0, 100, "2024-01-06"),
        ];
        let stats = genre_popularity(&interactions);

        let action = stats.iter().find(|s| s.genre == "Action").unwrap();
        assert_eq!(action.views, 2);
        assert!((action.avg_rating - 3.0).abs() < 1e-6);

        let adventure = stats.iter().find(|s| s.genre == "Adventure").unwrap();
        assert_eq!(adventure.views, 1);
    }

    #[test]
    fn test_total_views_equal_split_pairs() {
        let interactions = vec![
            interaction("U01", 1, "A", "Action, Adventure", 4.0, 100, "2024-01-05"),
            interaction("U02", 2, "B", "Drama", 3.0, 100, "2024-01-06"),
            interaction("U03", 3, "C", "Comedy, Romance, Drama", 5.0, 100, "2024-01-07"),
        ];
        let expected_pairs: usize = interactions
            .iter()
            .map(|i| split_genres(&i.genres).len())
            .sum();

        let total: usize = genre_popularity(&interactions).iter().map(|s| s.views).sum();
        assert_eq!(total, expected_pairs);
        assert_eq!(total, 6);
    }

    #[test]
    fn test_sorted_by_views_then_name() {
        let interactions = vec![
            interaction("U01", 1, "A", "Drama", 4.0, 100, "2024-01-05"),
            interaction("U01", 2, "B", "Comedy", 4.0, 100, "2024-01-06"),
            interaction("U01", 3, "C", "Drama", 4.0, 100, "2024-01-07"),
        ];
        let stats = genre_popularity(&interactions);
        assert_eq!(stats[0].genre, "Drama");
        assert_eq!(stats[1].genre, "Comedy");
    }
}
