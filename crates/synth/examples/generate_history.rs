//! Generate a synthetic viewing history and print a sample of it.
//!
//! Run with: cargo run --package synth --example generate_history

use catalog::{Catalog, Movie, split_genres};
use std::sync::Arc;
use synth::{HistoryGenerator, default_profiles};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    // A small in-memory catalog, enough to exercise every genre profile
    let genres = [
        "Drama",
        "Action, Adventure",
        "Comedy",
        "Thriller, Mystery",
        "Romance",
        "Drama, Romance",
    ];
    let movies: Vec<Movie> = (0..300)
        .map(|i| Movie {
            id: i as u32,
            title: format!("Movie {i:03}"),
            genres: split_genres(genres[i % genres.len()]),
            base_rating: 3.0 + (i % 5) as f32 * 0.5,
        })
        .collect();
    let catalog = Arc::new(Catalog::from_movies(movies)?);

    let history = HistoryGenerator::new(catalog)
        .with_seed(42)
        .with_per_user(20)
        .generate(&default_profiles())?;

    println!("Generated {} interactions", history.len());
    for it in history.iter().take(10) {
        println!(
            "{} watched {} [{}] on {} - rating {:.1}, {} min",
            it.user_id, it.title, it.genres, it.watch_date, it.rating, it.watch_minutes
        );
    }

    Ok(())
}
