//! 目录查询基准测试
//!
//! 对比搜索、分类过滤和两者组合在不同目录规模下的开销。

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use reelmark::catalog::{CatalogStore, Category, CategoryFilter};
use reelmark::storage::MemoryKvStore;
use std::hint::black_box;

const CATEGORIES: [&str; 8] = [
    "action",
    "drama",
    "comedy",
    "horror",
    "romance",
    "sci-fi",
    "documentary",
    "other",
];

/// 生成测试用导出文件内容
fn generate_export(num_records: usize) -> String {
    let records: Vec<serde_json::Value> = (0..num_records)
        .map(|i| {
            serde_json::json!({
                "id": i as i64 + 1,
                "title": format!("Feature film {}", i),
                "link": format!("https://cdn.example.com/{}/index.m3u8", i),
                "category": CATEGORIES[i % CATEGORIES.len()],
                "description": format!("Restored print number {} with director commentary", i),
                "dateAdded": "2024-01-01T00:00:00Z",
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}

fn populated_store(num_records: usize) -> CatalogStore {
    let mut store = CatalogStore::load(Box::new(MemoryKvStore::new()), "movies");
    store
        .import_merge(&generate_export(num_records))
        .expect("seed import");
    store
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/query");

    for size in [100usize, 500, 2_000] {
        group.throughput(Throughput::Elements(size as u64));

        let mut store = populated_store(size);
        store.set_search_term("commentary 4");
        group.bench_with_input(BenchmarkId::new("search", size), &size, |b, _| {
            b.iter(|| black_box(store.query_count()))
        });

        let mut store = populated_store(size);
        store.set_category_filter(CategoryFilter::Only(Category::SciFi));
        group.bench_with_input(BenchmarkId::new("category", size), &size, |b, _| {
            b.iter(|| black_box(store.query_count()))
        });

        let mut store = populated_store(size);
        store.set_search_term("FILM 1");
        store.set_category_filter(CategoryFilter::Only(Category::Drama));
        group.bench_with_input(BenchmarkId::new("search+category", size), &size, |b, _| {
            b.iter(|| black_box(store.query().count()))
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let store = populated_store(500);
    c.bench_function("catalog/export_all_500", |b| {
        b.iter(|| black_box(store.export_all().map(|s| s.len())))
    });
}

criterion_group!(benches, bench_query, bench_export);
criterion_main!(benches);
