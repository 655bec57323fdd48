//! Benchmarks for playing complete games.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rust_gridiron::{simulate_game, GameEngine, GameRng, TeamId};

fn bench_single_game(c: &mut Criterion) {
    let engine = GameEngine::default();

    c.bench_function("full_game", |b| {
        b.iter(|| {
            let summary =
                simulate_game(black_box(&engine), black_box(TeamId::Eagles), black_box(42));
            black_box(summary)
        });
    });
}

fn bench_game_batch(c: &mut Criterion) {
    let engine = GameEngine::default();

    c.bench_function("10_games_sequential", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                let summary = simulate_game(&engine, TeamId::Patriots, black_box(seed));
                let _ = black_box(summary);
            }
        });
    });
}

fn bench_single_play(c: &mut Criterion) {
    let engine = GameEngine::default();
    let mut rng = GameRng::new(7);
    let state = engine
        .create_game("packers", &mut rng)
        .expect("packers is in the catalog");

    c.bench_function("apply_play", |b| {
        b.iter(|| {
            let report = engine.apply_play(black_box(&state), black_box("slants"), &mut rng);
            black_box(report)
        });
    });
}

criterion_group!(benches, bench_single_game, bench_game_batch, bench_single_play);
criterion_main!(benches);
