use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_runtime_config_for_size, nearly_sorted_sequence, random_sequence, seeded_rng};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use inversion::{
    CountAlgorithm, CountContext, algorithm_name, all_algorithms, count_inversions,
    sort_in_place_and_count_with_ctx,
};

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];
const PARALLEL_BENCH_SIZE: usize = 1 << 20;
const RANDOM_MAX: u64 = (1 << 20) - 1;

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    Reversed,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Reversed => "reversed",
        }
    }

    fn salt(self) -> u64 {
        match self {
            Self::RandomUniform => 11,
            Self::NearlySorted1pctSwaps => 12,
            Self::Reversed => 13,
        }
    }
}

const DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Reversed,
];

fn generate_dataset(dist: Distribution, size: usize) -> Vec<u64> {
    let mut rng = seeded_rng((dist.salt() << 48) ^ size as u64);
    match dist {
        Distribution::RandomUniform => random_sequence(&mut rng, size, RANDOM_MAX),
        Distribution::NearlySorted1pctSwaps => nearly_sorted_sequence(&mut rng, size, 1),
        Distribution::Reversed => (0..size as u64).rev().collect(),
    }
}

fn bench_count(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("inversion/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let base = generate_dataset(dist, size);

            for &algo in all_algorithms() {
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        let mut ctx = CountContext::default();
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            let count = sort_in_place_and_count_with_ctx(algo, &mut data, &mut ctx);
                            total += start.elapsed();
                            black_box((count, &data));
                        }
                        total
                    });
                });
            }

            group.bench_function(BenchmarkId::new("count_only", size), |bencher| {
                bencher.iter(|| black_box(count_inversions(black_box(&base))));
            });

            group.bench_function(BenchmarkId::new("std_stable_sort", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

fn bench_parallel_speedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("inversion/parallel_vs_top_down");
    let size = PARALLEL_BENCH_SIZE;
    apply_runtime_config_for_size(&mut group, size);
    let base = generate_dataset(Distribution::RandomUniform, size);

    for algo in [CountAlgorithm::TopDown, CountAlgorithm::Parallel] {
        group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
            bencher.iter(|| {
                let mut data = base.clone();
                black_box(inversion::sort_in_place_and_count(algo, &mut data))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_count, bench_parallel_speedup);
criterion_main!(benches);
