//! Benchmarks for scoring and ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzrank_search::{rank_reader, FuzzyScorer, Ranker, ReaderOptions, ScoreWeights};
use std::io::Cursor;

fn create_paths(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            // Spread files over a small directory tree
            format!(
                "src/module_{}/submodule_{}/FileName{}.rs",
                i % 17,
                i % 5,
                i
            )
        })
        .collect()
}

fn bench_single_score(c: &mut Criterion) {
    let scorer = FuzzyScorer::new("subfn", ScoreWeights::BALANCED);

    c.bench_function("score_single", |b| {
        b.iter(|| scorer.score(black_box("src/module_3/submodule_1/FileName42.rs")))
    });
}

fn bench_rank_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_lines");

    for size in [100, 1000, 10000].iter() {
        let paths = create_paths(*size);
        let ranker = Ranker::new("mod3fn", ScoreWeights::BALANCED);

        group.bench_with_input(BenchmarkId::new("balanced", size), size, |b, _| {
            b.iter(|| ranker.rank_lines(black_box(paths.iter().map(String::as_str))))
        });
    }

    group.finish();
}

fn bench_rank_reader(c: &mut Criterion) {
    let input = create_paths(10000).join("\n").into_bytes();
    let ranker = Ranker::new("sub4", ScoreWeights::BALANCED);
    let options = ReaderOptions::default();

    c.bench_function("rank_reader_10000", |b| {
        b.iter(|| rank_reader(Cursor::new(black_box(input.as_slice())), &ranker, &options))
    });
}

criterion_group!(benches, bench_single_score, bench_rank_lines, bench_rank_reader);
criterion_main!(benches);
