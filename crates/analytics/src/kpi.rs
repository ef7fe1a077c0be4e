//! Headline metrics over the interaction table.

use serde::Serialize;
use std::collections::HashSet;
use synth::Interaction;

/// The four dashboard-level counters
#[derive(Debug, Clone, Serialize)]
pub struct Kpis {
    pub users: usize,
    pub distinct_movies: usize,
    pub avg_rating: f32,
    pub avg_watch_minutes: f32,
}

/// Compute KPIs from the interaction table.
///
/// Averages are 0.0 for an empty table rather than NaN.
pub fn kpis(interactions: &[Interaction]) -> Kpis {
    let users: HashSet<&str> = interactions.iter().map(|i| i.user_id.as_str()).collect();
    let movies: HashSet<u32> = interactions.iter().map(|i| i.movie_id).collect();

    let (avg_rating, avg_watch_minutes) = if interactions.is_empty() {
        (0.0, 0.0)
    } else {
        let n = interactions.len() as f32;
        let rating_sum: f32 = interactions.iter().map(|i| i.rating).sum();
        let minutes_sum: f32 = interactions.iter().map(|i| i.watch_minutes as f32).sum();
        (rating_sum / n, minutes_sum / n)
    };

    Kpis {
        users: users.len(),
        distinct_movies: movies.len(),
        avg_rating,
        avg_watch_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::interaction;

    #[test]
    fn test_kpis_basic() {
        let interactions = vec![
            interaction("U01", 1, "A", "Drama", 4.0, 100, "2024-01-05"),
            interaction("U01", 2, "B", "Comedy", 2.0, 140, "2024-02-10"),
            interaction("U02", 1, "A", "Drama", 3.0, 120, "2024-03-20"),
        ];
        let k = kpis(&interactions);
        assert_eq!(k.users, 2);
        assert_eq!(k.distinct_movies, 2);
        assert!((k.avg_rating - 3.0).abs() < 1e-6);
        assert!((k.avg_watch_minutes - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_kpis_empty() {
        let k = kpis(&[]);
        assert_eq!(k.users, 0);
        assert_eq!(k.distinct_movies, 0);
        assert_eq!(k.avg_rating, 0.0);
    }
}
