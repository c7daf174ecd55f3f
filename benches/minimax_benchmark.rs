use std::sync::Arc;

use mills::board::color::Color;
use mills::game::{tick, GameTick, Variant};
use mills::moves::Move;
use mills::rules::Rules;
use mills::searcher::{search, SearchConfig};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let rules = Rules::default();
    let three = GameTick::start(&rules, Arc::new(Variant::ThreeMensMorris.config())).unwrap();
    let nine = nine_mens_opening(&rules);

    c.bench_function("minimax three men's morris depth 3", |b| {
        b.iter(|| search(&rules, &three, &SearchConfig::with_depth(3)).unwrap())
    });
    c.bench_function("minimax nine men's morris depth 2", |b| {
        b.iter(|| search(&rules, &nine, &SearchConfig::with_depth(2)).unwrap())
    });
    c.bench_function("parallel minimax nine men's morris depth 2", |b| {
        let config = SearchConfig {
            parallel: true,
            ..SearchConfig::with_depth(2)
        };
        b.iter(|| search(&rules, &nine, &config).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn nine_mens_opening(rules: &Rules) -> GameTick {
    let start = GameTick::start(rules, Arc::new(Variant::NineMensMorris.config())).unwrap();
    ["a1", "d2", "d1", "b2"]
        .iter()
        .zip([Color::White, Color::Black].iter().cycle())
        .map(|(to, &color)| Move::place(color, to.parse().unwrap()))
        .try_fold(start, |current, mv| tick(rules, &current, &mv))
        .unwrap()
}
