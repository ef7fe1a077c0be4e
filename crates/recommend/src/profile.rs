//! Builds a ViewerProfile from the interaction table.
//!
//! Gather everything once upfront so the filters never re-scan the
//! interaction table: watched set, favorite genre, average rating.

use crate::types::ViewerProfile;
use analytics::favorite_genre;
use anyhow::{Result, anyhow};
use synth::Interaction;

/// Aggregate one user's interactions into a profile.
///
/// Errors when the user has no viewing history at all.
pub fn build_viewer_profile(interactions: &[Interaction], user_id: &str) -> Result<ViewerProfile> {
    let rows: Vec<&Interaction> = interactions
        .iter()
        .filter(|i| i.user_id == user_id)
        .collect();
    if rows.is_empty() {
        return Err(anyhow!("user {} has no viewing history", user_id));
    }

    let mut profile = ViewerProfile::new(user_id);
    let mut rating_sum = 0.0f32;
    for it in &rows {
        profile.watched.insert(it.movie_id);
        rating_sum += it.rating;
    }
    profile.avg_rating = rating_sum / rows.len() as f32;
    profile.favorite_genre = favorite_genre(rows.iter().copied());

    Ok(profile)
}
