//! Benchmarks for reconciliation and score normalization
//!
//! Run with: cargo bench --package pipeline

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{normalize, reconcile};
use sources::{CatalogMovie, CriticRating, CriticRecord, NamedEntry};

fn sample_records() -> (CriticRecord, CatalogMovie) {
    let critic = CriticRecord {
        title: Some("Heat".to_string()),
        year: Some("1995".to_string()),
        genre: Some("N/A".to_string()),
        imdb_rating: Some("8.3".to_string()),
        metascore: Some("76".to_string()),
        ratings: vec![CriticRating {
            source: "Rotten Tomatoes".to_string(),
            value: "88%".to_string(),
        }],
        ..Default::default()
    };
    let movie = CatalogMovie {
        id: 949,
        title: Some("Heat".to_string()),
        release_date: Some("1995-12-15".to_string()),
        genres: ["Action", "Crime", "Drama", "Thriller"]
            .iter()
            .map(|n| NamedEntry { name: n.to_string() })
            .collect(),
        poster_path: Some("/heat.jpg".to_string()),
        vote_average: Some(7.9),
        ..Default::default()
    };
    (critic, movie)
}

fn bench_reconcile(c: &mut Criterion) {
    let (critic, movie) = sample_records();

    c.bench_function("reconcile", |b| {
        b.iter(|| black_box(reconcile(black_box(&critic), black_box(&movie))))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let (critic, movie) = sample_records();

    c.bench_function("normalize", |b| {
        b.iter(|| black_box(normalize(black_box(&critic), black_box(movie.vote_average))))
    });
}

criterion_group!(benches, bench_reconcile, bench_normalize);
criterion_main!(benches);
