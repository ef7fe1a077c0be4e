//! Types for synthetic viewing history.

use catalog::MovieId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier for a synthetic user, e.g. "U01"
pub type UserId = String;

/// Hand-authored genre preferences for one synthetic user.
///
/// These are static constants, not learned from anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasteProfile {
    pub user_id: UserId,
    pub preferred_genres: Vec<String>,
}

impl TasteProfile {
    pub fn new(user_id: &str, preferred_genres: &[&str]) -> Self {
        Self {
            user_id: user_id.to_string(),
            preferred_genres: preferred_genres.iter().map(|g| g.to_string()).collect(),
        }
    }
}

/// One fabricated user-movie viewing event.
///
/// Regenerated from scratch every run, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub title: String,
    /// Raw comma-joined genre label of the watched movie
    pub genres: String,
    /// Fabricated rating, always within [1.0, 5.0]
    pub rating: f32,
    /// Fabricated watch duration in minutes
    pub watch_minutes: u16,
    /// Fabricated watch date from the fixed 2024 half-year window
    pub watch_date: NaiveDate,
}
