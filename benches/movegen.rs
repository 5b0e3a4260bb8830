//! Move generation and random self-play benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_backgammon::board::{Board, Layout};
use rust_backgammon::core::{Color, GameConfig, GameRng};
use rust_backgammon::dice::Roll;
use rust_backgammon::game::Game;
use rust_backgammon::turn::legal_actions;

fn bench_legal_actions(c: &mut Criterion) {
    let opening = Board::new();
    let lengths = Roll::new(6, 6).unwrap().move_lengths();
    c.bench_function("legal_actions_opening_double", |b| {
        b.iter(|| legal_actions(black_box(&opening), Color::White, black_box(&lengths)))
    });

    let bear_off = Layout::empty()
        .with_checkers(18, Color::White, 5)
        .with_checkers(21, Color::White, 5)
        .with_checkers(23, Color::White, 5)
        .build()
        .unwrap();
    let lengths = Roll::new(6, 2).unwrap().move_lengths();
    c.bench_function("legal_actions_bear_off", |b| {
        b.iter(|| legal_actions(black_box(&bear_off), Color::White, black_box(&lengths)))
    });
}

fn bench_play_out(c: &mut Criterion) {
    c.bench_function("random_game", |b| {
        b.iter(|| {
            let mut game = Game::seeded(GameConfig::new(7)).unwrap();
            let mut rng = GameRng::new(7);
            game.play_out(&mut rng, 5_000).unwrap()
        })
    });
}

criterion_group!(benches, bench_legal_actions, bench_play_out);
criterion_main!(benches);
