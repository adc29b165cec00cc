//! Benchmarks for the three lookup strategies and the counter.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use prime_locator::lucy::prime_count;
use prime_locator::{nth_prime_with_options, Method, Options};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("nth_prime");

    for n in [1_000u64, 100_000] {
        for method in [Method::Regular, Method::Segmented, Method::PrimeCounting] {
            let opts = Options {
                method,
                ..Options::default()
            };
            group.bench_with_input(
                BenchmarkId::new(method.to_string(), n),
                &n,
                |b, &n| b.iter(|| nth_prime_with_options(black_box(n), &opts).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_prime_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_count");

    for x in [1_000_000u64, 100_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(x), &x, |b, &x| {
            b.iter(|| prime_count(black_box(x)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_prime_count);

criterion_main!(benches);
