//! Fibonacci strategy comparison.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use labyrinth_worlds::fib::{fib_iterative, fib_recursive, FibCache, FibSequence};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("fib");
    for &n in &[10u32, 20, 25] {
        group.bench_with_input(BenchmarkId::new("recursive", n), &n, |b, &n| {
            b.iter(|| black_box(fib_recursive(n)));
        });
        group.bench_with_input(BenchmarkId::new("memoized_cold", n), &n, |b, &n| {
            b.iter(|| {
                let mut cache = FibCache::new();
                black_box(cache.fib(n))
            });
        });
        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter(|| black_box(fib_iterative(n)));
        });
        group.bench_with_input(BenchmarkId::new("sequence", n), &n, |b, &n| {
            b.iter(|| black_box(FibSequence::new().nth(n as usize)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
