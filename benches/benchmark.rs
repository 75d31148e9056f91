// Performance benchmarks for the bookx lookup pipeline
use bookx_core::{
    BookRecord, CatalogIndex, MetadataTable, RecommendConfig, RecommendService, SimilarityMatrix,
    TrendingList,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

fn synthetic_titles(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Book Number {}", i)).collect()
}

fn synthetic_service(count: usize) -> RecommendService {
    let mut rng = rand::rng();

    let titles = synthetic_titles(count);
    let mut scores = vec![0.0f32; count * count];
    for i in 0..count {
        for j in 0..count {
            scores[i * count + j] = if i == j {
                1.0
            } else {
                rng.random_range(0.0f32..1.0f32)
            };
        }
    }

    let books = titles
        .iter()
        .map(|title| BookRecord::new(title, "Some Author", "http://img/cover.jpg"))
        .collect();

    RecommendService::new(
        RecommendConfig::default(),
        CatalogIndex::new(titles),
        SimilarityMatrix::new(count, scores).unwrap(),
        MetadataTable::new(books),
        TrendingList::new(Vec::new()),
    )
    .unwrap()
}

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for size in [100, 1000, 10000].iter() {
        let catalog = CatalogIndex::new(synthetic_titles(*size));
        group.bench_with_input(BenchmarkId::new("typo_query", size), size, |b, _| {
            b.iter(|| catalog.resolve(black_box("book numbr 42"), 0.7, 10));
        });
        group.bench_with_input(BenchmarkId::new("miss_query", size), size, |b, _| {
            b.iter(|| catalog.resolve(black_box("zzzzzzzzzzzzzzzz"), 0.7, 10));
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 1000].iter() {
        let service = synthetic_service(*size);
        group.bench_with_input(BenchmarkId::new("bookx", size), size, |b, _| {
            b.iter(|| service.recommend(black_box("Book Number 42")));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_resolve, benchmark_recommend);
criterion_main!(benches);
