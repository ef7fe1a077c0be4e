//! Per-user behaviour profiles.

use catalog::split_genres;
use serde::Serialize;
use std::collections::HashMap;
use synth::{Interaction, UserId};

/// Behaviour summary for one synthetic user
#[derive(Debug, Clone, Serialize)]
pub struct UserBehaviour {
    pub user_id: UserId,
    pub movies_watched: usize,
    pub avg_rating: f32,
    pub avg_watch_minutes: f32,
    /// Most-watched split genre; ties break toward the lexicographically
    /// smaller name so the result is stable
    pub favorite_genre: Option<String>,
}

/// The most-watched genre in a set of interactions, after splitting.
pub fn favorite_genre<'a, I>(interactions: I) -> Option<String>
where
    I: IntoIterator<Item = &'a Interaction>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for it in interactions {
        for genre in split_genres(&it.genres) {
            *counts.entry(genre).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(genre, _)| genre)
}

/// Build one behaviour row per user, sorted by user id.
pub fn user_profiles(interactions: &[Interaction]) -> Vec<UserBehaviour> {
    let mut per_user: HashMap<&str, Vec<&Interaction>> = HashMap::new();
    for it in interactions {
        per_user.entry(it.user_id.as_str()).or_default().push(it);
    }

    let mut profiles: Vec<UserBehaviour> = per_user
        .into_iter()
        .map(|(user_id, rows)| {
            let n = rows.len() as f32;
            let rating_sum: f32 = rows.iter().map(|i| i.rating).sum();
            let minutes_sum: f32 = rows.iter().map(|i| i.watch_minutes as f32).sum();
            UserBehaviour {
                user_id: user_id.to_string(),
                movies_watched: rows.len(),
                avg_rating: rating_sum / n,
                avg_watch_minutes: minutes_sum / n,
                favorite_genre: favorite_genre(rows.iter().copied()),
            }
        })
        .collect();

    profiles.sort_by(|a, b| a.user_id.cmp(&b.user_id));
    profiles
}
