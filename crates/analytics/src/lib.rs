//! # Analytics Crate
//!
//! Descriptive statistics over the synthetic interaction table:
//!
//! - **kpi**: headline counters (users, movies, average rating/watch time)
//! - **genre**: genre popularity after multi-genre splitting
//! - **movies**: weighted top-movies ranking
//! - **users**: per-user behaviour profiles and favorite genres
//! - **trends**: monthly viewing counts
//!
//! All functions are pure passes over `&[Interaction]`; nothing here holds
//! state between runs.

pub mod genre;
pub mod kpi;
pub mod movies;
pub mod trends;
pub mod users;

pub use genre::{GenreStat, genre_popularity};
pub use kpi::{Kpis, kpis};
pub use movies::{MovieScore, top_movies};
pub use trends::{MonthlyViews, monthly_views};
pub use users::{UserBehaviour, favorite_genre, user_profiles};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use synth::Interaction;

    /// Shorthand for building interaction rows in tests
    pub fn interaction(
        user_id: &str,
        movie_id: u32,
        title: &str,
        genres: &str,
        rating: f32,
        watch_minutes: u16,
        watch_date: &str,
    ) -> Interaction {
        Interaction {
            user_id: user_id.to_string(),
            movie_id,
            title: title.to_string(),
            genres: genres.to_string(),
            rating,
            watch_minutes,
            watch_date: NaiveDate::parse_from_str(watch_date, "%Y-%m-%d").unwrap(),
        }
    }
}
