use criterion::{Criterion, criterion_group, criterion_main};
use kaboom_core::{BoardGenerator, GameConfig, GameSession, RandomBoardGenerator};
use std::hint::black_box;

fn generate_boards(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, width, height, mines) in [
        ("small", 9, 9, 10),
        ("medium", 16, 16, 40),
        ("large", 30, 16, 99),
        ("huge", 255, 255, 10_000),
    ] {
        let config = GameConfig::new(width, height, mines).unwrap();
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(RandomBoardGenerator::seeded(seed).generate(config).unwrap())
            })
        });
    }
    group.finish();
}

fn flood_fill_empty_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for (name, side) in [("64x64", 64), ("255x255", 255)] {
        let config = GameConfig::new(side, side, 0).unwrap();
        let game = GameSession::from_seed(config, 0).unwrap();
        group.bench_function(name, |b| {
            b.iter_batched(
                || game.clone(),
                |mut game| black_box(game.reveal((0, 0)).unwrap()),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, generate_boards, flood_fill_empty_board);
criterion_main!(benches);
