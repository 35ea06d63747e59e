//! Benchmarks for form store operations.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formforge_core::registry::new_field;
use formforge_core::{FieldPatch, FieldType, FormStore};

/// Builds a store holding `count` fields, cycling through every type.
fn populated_store(count: usize) -> FormStore {
    let mut store = FormStore::new();
    for i in 0..count {
        let field_type = FieldType::ALL[i % FieldType::ALL.len()];
        store.add_field(new_field(field_type)).unwrap();
    }
    store
}

/// Benchmarks appending fields.
fn bench_add_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_field");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("append", size), size, |b, &size| {
            b.iter_with_setup(
                || populated_store(size),
                |mut store| {
                    store.add_field(new_field(FieldType::ShortText)).unwrap();
                    black_box(store)
                },
            )
        });
    }

    group.finish();
}

/// Benchmarks updating the last field, the worst case for the id lookup.
fn bench_update_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_field");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("label", size), size, |b, &size| {
            b.iter_with_setup(
                || {
                    let store = populated_store(size);
                    let id = store.fields().last().map(|f| f.id()).unwrap();
                    (store, id)
                },
                |(mut store, id)| {
                    store
                        .update_field(FieldPatch::new(id).with_label(black_box("Renamed")))
                        .unwrap();
                    black_box(store)
                },
            )
        });
    }

    group.finish();
}

/// Benchmarks moving the first field to the end.
fn bench_move_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_field");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("first_to_last", size), size, |b, &size| {
            b.iter_with_setup(
                || {
                    let store = populated_store(size);
                    let id = store.fields()[0].id();
                    (store, id)
                },
                |(mut store, id)| {
                    store.move_field(id, usize::MAX).unwrap();
                    black_box(store)
                },
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_field, bench_update_field, bench_move_field);
criterion_main!(benches);
