use coinchange::{solve_dp, solve_greedy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const COINS: [usize; 6] = [1, 2, 5, 10, 20, 50];

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin_change");
    for &amount in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("dp", amount), &amount, |b, &amount| {
            b.iter(|| solve_dp(black_box(&COINS), black_box(amount)))
        });
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| solve_greedy(black_box(&COINS), black_box(amount)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
