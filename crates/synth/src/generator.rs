//! Seeded synthetic history generation.
//!
//! For each user profile, sample movies from the catalog (biased toward the
//! user's preferred genres when possible) and fabricate rating, watch time
//! and watch date fields. A single `StdRng` seeded from the config is walked
//! in profile order, so every run with the same seed, catalog and profiles
//! produces an identical interaction table.

use crate::types::{Interaction, TasteProfile};
use anyhow::{Context, Result};
use catalog::{Catalog, Movie};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::sync::Arc;
use tracing::{debug, instrument};

/// First day of the fixed watch-date window
const WATCH_WINDOW_START: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};
/// Last day of the window, inclusive
const WATCH_WINDOW_END: NaiveDate = match NaiveDate::from_ymd_opt(2024, 6, 30) {
    Some(d) => d,
    None => unreachable!(),
};

/// Tunable knobs for history synthesis
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// RNG seed; the same seed always reproduces the same table
    pub seed: u64,
    /// Target interactions per user
    pub per_user: usize,
    /// Prefer movies matching the user's genres when enough exist
    pub genre_bias: bool,
    /// Std deviation of the Gaussian noise added to the base rating
    pub rating_noise: f32,
    /// Extra rating credit when a movie matches a preferred genre
    pub affinity_bonus: f32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            per_user: 60,
            genre_bias: true,
            rating_noise: 0.5,
            affinity_bonus: 0.3,
        }
    }
}

/// Generates the synthetic interaction table from a catalog
pub struct HistoryGenerator {
    catalog: Arc<Catalog>,
    config: SynthConfig,
}

impl HistoryGenerator {
    /// Create a generator with default config
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            config: SynthConfig::default(),
        }
    }

    /// Replace the whole config
    pub fn with_config(mut self, config: SynthConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure the RNG seed (default: 42)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Configure interactions per user (default: 60)
    pub fn with_per_user(mut self, per_user: usize) -> Self {
        self.config.per_user = per_user;
        self
    }

    /// Enable or disable genre-biased sampling (default: enabled)
    pub fn with_genre_bias(mut self, genre_bias: bool) -> Self {
        self.config.genre_bias = genre_bias;
        self
    }

    /// Generate the full interaction table for the given profiles.
    ///
    /// Profiles are processed in order; the RNG state carries across users.
    #[instrument(skip(self, profiles), fields(seed = self.config.seed))]
    pub fn generate(&self, profiles: &[TasteProfile]) -> Result<Vec<Interaction>> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let noise = Normal::new(0.0f32, self.config.rating_noise)
            .context("invalid rating noise configuration")?;

        let window_days = (WATCH_WINDOW_END - WATCH_WINDOW_START).num_days() as u64 + 1;
        let mut interactions = Vec::with_capacity(profiles.len() * self.config.per_user);

        for profile in profiles {
            let pool = self.sample_pool(profile);
            let take = self.config.per_user.min(pool.len());
            debug!(
                user = %profile.user_id,
                pool = pool.len(),
                take,
                "sampling viewing history"
            );

            // Distinct picks: a user never watches the same movie twice per run
            let picks = rand::seq::index::sample(&mut rng, pool.len(), take);
            for idx in picks.into_iter() {
                let movie = pool[idx];
                interactions.push(self.fabricate(profile, movie, &noise, window_days, &mut rng));
            }
        }

        debug!(total = interactions.len(), "synthetic history generated");
        Ok(interactions)
    }

    /// Movies this user samples from: the genre-matched subset when biasing
    /// is on and it is large enough, otherwise the whole catalog.
    fn sample_pool(&self, profile: &TasteProfile) -> Vec<&Movie> {
        if self.config.genre_bias {
            let matched: Vec<&Movie> = self
                .catalog
                .movies()
                .iter()
                .filter(|m| {
                    profile
                        .preferred_genres
                        .iter()
                        .any(|g| m.matches_genre(g))
                })
                .collect();
            if matched.len() >= self.config.per_user {
                return matched;
            }
        }
        self.catalog.movies().iter().collect()
    }

    /// Fabricate one interaction record for a sampled movie.
    fn fabricate(
        &self,
        profile: &TasteProfile,
        movie: &Movie,
        noise: &Normal<f32>,
        window_days: u64,
        rng: &mut StdRng,
    ) -> Interaction {
        let affinity = profile
            .preferred_genres
            .iter()
            .any(|g| movie.matches_genre(g));

        let mut rating = movie.base_rating + noise.sample(rng);
        if affinity {
            rating += self.config.affinity_bonus;
        }
        // Round to one decimal, then clamp into the user-rating scale
        let rating = ((rating * 10.0).round() / 10.0).clamp(1.0, 5.0);

        let watch_minutes: u16 = rng.random_range(60..180);
        let offset = rng.random_range(0..window_days);
        let watch_date = WATCH_WINDOW_START + Days::new(offset);

        Interaction {
            user_id: profile.user_id.clone(),
            movie_id: movie.id,
            title: movie.title.clone(),
            genres: movie.genre_label(),
            rating,
            watch_minutes,
            watch_date,
        }
    }
}
