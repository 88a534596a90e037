//! Benchmarks for the kata algorithms and the exercise runner

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use katas::algo::{dynamic, sorting, strings};
use katas::{ExerciseRegistry, Runner, RunnerConfig, Selection};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_values(size: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x6b61_7461);
    (0..size).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn random_text(size: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    // small alphabet so patterns actually recur
    (0..size).map(|_| (b'a' + rng.gen_range(0..4u8)) as char).collect()
}

/// Benchmark the comparison sorts on shuffled input
fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");

    for &size in &[64, 1_024, 16_384] {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("heap_sort_{}", size), |b| {
            b.iter(|| {
                let mut v = values.clone();
                sorting::heap_sort(&mut v);
                black_box(v)
            })
        });

        group.bench_function(format!("merge_sort_{}", size), |b| {
            b.iter(|| black_box(sorting::merge_sort(&values)))
        });

        group.bench_function(format!("quick_sort_{}", size), |b| {
            b.iter(|| {
                let mut v = values.clone();
                sorting::quick_sort(&mut v);
                black_box(v)
            })
        });

        group.bench_function(format!("count_inversions_{}", size), |b| {
            b.iter(|| black_box(sorting::count_inversions(&values)))
        });
    }

    group.finish();
}

/// Benchmark substring search and suffix array construction
fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    for &size in &[1_024, 65_536] {
        let text = random_text(size);
        let pattern = &text[size / 2..size / 2 + 8];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("kmp_{}", size), |b| {
            b.iter(|| black_box(strings::kmp_search(&text, pattern)))
        });

        group.bench_function(format!("rabin_karp_{}", size), |b| {
            b.iter(|| black_box(strings::rabin_karp(&text, pattern)))
        });
    }

    let text = random_text(4_096);
    group.bench_function("suffix_array_4096", |b| {
        b.iter(|| black_box(strings::suffix_array(&text)))
    });

    group.finish();
}

/// Compare the divide-and-conquer skyline with the sweep-line one
fn bench_skyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("skyline");
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for &size in &[100, 2_000] {
        let buildings: Vec<(i64, i64, i64)> = (0..size)
            .map(|_| {
                let left = rng.gen_range(0..10_000);
                (left, left + rng.gen_range(1..500), rng.gen_range(1..1_000))
            })
            .collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("divide_and_conquer_{}", size), |b| {
            b.iter(|| black_box(dynamic::skyline(&buildings)))
        });

        group.bench_function(format!("sweep_{}", size), |b| {
            b.iter(|| black_box(dynamic::skyline_sweep(&buildings)))
        });
    }

    group.finish();
}

/// Benchmark a full catalog run at different worker counts
fn bench_runner(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner");
    group.sample_size(10);

    let Ok(registry) = ExerciseRegistry::builtin() else {
        return;
    };

    for &jobs in &[1, 4] {
        let runner = Runner::new(RunnerConfig {
            jobs,
            ..Default::default()
        });
        group.bench_function(format!("catalog_jobs_{}", jobs), |b| {
            b.iter(|| black_box(runner.run(&registry, &Selection::All)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorting, bench_strings, bench_skyline, bench_runner);
criterion_main!(benches);
