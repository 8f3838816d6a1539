use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crossword_layout::{build_layout, LayoutConfig};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossword_layout");

    let words: Vec<String> = ["deaf", "dog", "cringe", "trifle", "cat", "lion", "rind", "paul"]
        .into_iter()
        .map(str::to_owned)
        .collect();

    group.bench_function(BenchmarkId::new("build_layout", "unconstrained"), |b| {
        b.iter(|| build_layout(&words, &LayoutConfig::default()));
    });

    let boundary_config = LayoutConfig {
        boundary_exclusion: true,
        ..Default::default()
    };
    group.bench_function(BenchmarkId::new("build_layout", "boundary_exclusion"), |b| {
        b.iter(|| build_layout(&words, &boundary_config));
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
