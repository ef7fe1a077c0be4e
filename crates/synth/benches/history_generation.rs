//! Benchmarks for synthetic history generation
//!
//! Run with: cargo bench --package synth

use catalog::{Catalog, Movie, split_genres};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use synth::{HistoryGenerator, default_profiles};

fn build_test_catalog(n: usize) -> Arc<Catalog> {
    let genres = [
        "Drama",
        "Action, Adventure",
        "Comedy",
        "Thriller, Mystery",
        "Romance",
        "Drama, Romance",
    ];
    let movies: Vec<Movie> = (0..n)
        .map(|i| Movie {
            id: i as u32,
            title: format!("Movie {i}"),
            genres: split_genres(genres[i % genres.len()]),
            base_rating: 3.0 + (i % 5) as f32 * 0.5,
        })
        .collect();
    Arc::new(Catalog::from_movies(movies).expect("catalog"))
}

fn bench_generate_biased(c: &mut Criterion) {
    let catalog = build_test_catalog(500);
    let profiles = default_profiles();
    let generator = HistoryGenerator::new(catalog);

    c.bench_function("generate_history_biased_500", |b| {
        b.iter(|| {
            let history = generator.generate(black_box(&profiles)).unwrap();
            black_box(history)
        })
    });
}

fn bench_generate_uniform(c: &mut Criterion) {
    let catalog = build_test_catalog(500);
    let profiles = default_profiles();
    let generator = HistoryGenerator::new(catalog).with_genre_bias(false);

    c.bench_function("generate_history_uniform_500", |b| {
        b.iter(|| {
            let history = generator.generate(black_box(&profiles)).unwrap();
            black_box(history)
        })
    });
}

criterion_group!(benches, bench_generate_biased, bench_generate_uniform);
criterion_main!(benches);
