use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use teen_patti::evaluator::evaluate;
use teen_patti::game::Round;
use teen_patti::hand::Hand;

fn bench_evaluate(c: &mut Criterion) {
    let cases: [(&str, Hand); 3] = [
        ("high_card", "2s 5h 9d".parse().unwrap()),
        ("pure_sequence", "As Ks Qs".parse().unwrap()),
        ("trail", "7s 7h 7d".parse().unwrap()),
    ];

    let mut g = c.benchmark_group("evaluate");
    for (name, hand) in &cases {
        g.bench_with_input(BenchmarkId::new(*name, hand), hand, |b, input| {
            b.iter(|| evaluate(black_box(input)))
        });
    }
    g.finish();
}

fn bench_deal_and_resolve(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    c.bench_function("deal_and_resolve", |b| {
        b.iter(|| {
            let round = Round::deal(&mut rng);
            black_box(round.resolve())
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_deal_and_resolve);
criterion_main!(benches);
