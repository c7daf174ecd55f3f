use std::sync::Arc;

use mills::board::color::Color;
use mills::game::{tick, GameTick, Variant};
use mills::move_generator::{count_moves, generate_moves};
use mills::rules::Rules;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let rules = Rules::default();
    let midgame = play_out(&rules, Variant::NineMensMorris, 24);

    c.bench_function("generate moves nine men's morris midgame", |b| {
        b.iter(|| generate_moves(midgame.game(), midgame.turn()))
    });
    c.bench_function("count moves nine men's morris midgame", |b| {
        b.iter(|| count_moves(midgame.game(), Color::White) + count_moves(midgame.game(), Color::Black))
    });
    c.bench_function("play 60 plies of twelve men's morris", |b| {
        b.iter(|| play_out(&rules, Variant::TwelveMensMorris, 60))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Plays up to `plies` moves, always picking the middle of the move list.
fn play_out(rules: &Rules, variant: Variant, plies: usize) -> GameTick {
    let mut current = GameTick::start(rules, Arc::new(variant.config())).unwrap();
    for _ in 0..plies {
        if current.is_game_over() {
            break;
        }
        let moves = generate_moves(current.game(), current.turn());
        current = tick(rules, &current, &moves[moves.len() / 2]).unwrap();
    }
    current
}
