use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use heapsort_kit::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integer Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 2_000;
    let input: Vec<u32> = (0..count).map(|_| rng.random()).collect();

    for algorithm in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::new(algorithm.name(), count), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut data| sort(black_box(&mut data), algorithm),
                BatchSize::SmallInput,
            )
        });
    }

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("Line Sort");
    group.sample_size(10);

    // Lines share a long prefix so most comparisons walk deep into the record.
    let mut rng = rand::rng();
    let count = 2_000;
    let prefix = "common_prefix_which_is_quite_long_";

    let input: Vec<Line> = (0..count)
        .map(|_| {
            let suffix: String = (0..8).map(|_| rng.random_range('a'..='z')).collect();
            Line::from(format!("{}{}\n", prefix, suffix).as_str())
        })
        .collect();

    for algorithm in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::new(algorithm.name(), count), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut data| sort(black_box(&mut data), algorithm),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_integers, bench_lines);
criterion_main!(benches);
