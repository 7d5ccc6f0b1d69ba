use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use catalog_core::ProductId;
use catalog_infra::read_model::{CatalogStore, InMemoryCatalogStore};
use catalog_products::{Product, Variant};
use std::sync::Arc;

fn product(n: i64) -> Product {
    Product::new(ProductId::new(n), format!("Product {n}"), "bench")
        .with_variant(Variant::new(format!("A{n}"), 10.0, 5, "size", "S"))
        .with_variant(Variant::new(format!("B{n}"), 12.0, 5, "size", "M"))
}

fn filled_store(size: i64) -> InMemoryCatalogStore {
    InMemoryCatalogStore::with_products((0..size).map(product).collect())
}

fn bench_list_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_all");
    for size in [10i64, 100, 1_000] {
        let store = filled_store(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(store.list_all()));
        });
    }
    group.finish();
}

fn bench_lookup_and_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let store = filled_store(1_000);

    group.bench_function("get_by_id_last", |b| {
        b.iter(|| black_box(store.get_by_id(ProductId::new(999))))
    });

    group.bench_function("replace_by_id_middle", |b| {
        b.iter(|| store.replace_by_id(ProductId::new(500), black_box(product(500))))
    });

    group.bench_function("replace_variant_middle", |b| {
        b.iter(|| {
            store.replace_variant(
                ProductId::new(500),
                "B500",
                black_box(Variant::new("B500", 11.0, 4, "size", "M")),
            )
        })
    });
    group.finish();
}

fn bench_contended_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_insert");
    for threads in [1usize, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let store = Arc::new(InMemoryCatalogStore::new());
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let store = store.clone();
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                store.insert(product((t * 100 + i) as i64));
                                black_box(store.list_all().len());
                            }
                        })
                    })
                    .collect();
                for h in handles {
                    let _ = h.join();
                }
                store.len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_list_all, bench_lookup_and_replace, bench_contended_insert);
criterion_main!(benches);
