//! Benchmark suite for collection mutation paths
//!
//! Measures the hot operations a map editor performs on capacity-bounded
//! collections: bulk insertion and removal on lists, and row/column
//! insertion on tables (column insertion rebuilds the row-major storage and
//! is the path most worth watching).
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wolfdata_collections::prelude::*;

fn open_capacity() -> TableCapacity {
	TableCapacity::new(CapacityPolicy::Unbounded, CapacityPolicy::Unbounded)
}

/// Benchmark list insertion and removal at several sizes
fn bench_list_insert_remove(c: &mut Criterion) {
	let mut group = c.benchmark_group("list_insert_remove");

	for size in [100usize, 1_000, 10_000] {
		group.throughput(Throughput::Elements(size as u64));
		group.bench_with_input(BenchmarkId::new("push", size), &size, |b, &size| {
			b.iter(|| {
				let mut list = CapacityList::new(CapacityPolicy::Unbounded, |i| i as u32);
				for value in 0..size {
					list.push(black_box(value as u32)).unwrap();
				}
				black_box(list.len())
			});
		});
		group.bench_with_input(BenchmarkId::new("insert_front", size), &size, |b, &size| {
			b.iter(|| {
				let mut list = CapacityList::new(CapacityPolicy::Unbounded, |i| i as u32);
				for value in 0..size {
					list.insert(0, black_box(value as u32)).unwrap();
				}
				black_box(list.len())
			});
		});
		group.bench_with_input(BenchmarkId::new("remove_tail", size), &size, |b, &size| {
			b.iter(|| {
				let mut list =
					CapacityList::with_items(CapacityPolicy::Unbounded, vec![0u32; size], |_| 0)
						.unwrap();
				while !list.is_empty() {
					list.remove_at(list.len() - 1).unwrap();
				}
				black_box(list.len())
			});
		});
	}

	group.finish();
}

/// Benchmark table row and column insertion on map-sized grids
fn bench_table_insert(c: &mut Criterion) {
	let mut group = c.benchmark_group("table_insert");

	for size in [20usize, 100] {
		let rows = vec![vec![0u16; size]; size];
		group.throughput(Throughput::Elements(size as u64));

		group.bench_with_input(BenchmarkId::new("insert_row", size), &rows, |b, rows| {
			b.iter(|| {
				let mut table = Table::with_rows(open_capacity(), rows.clone(), |_, _| 0).unwrap();
				table.insert_row(size / 2, black_box(vec![1u16; size])).unwrap();
				black_box(table.row_count())
			});
		});
		group.bench_with_input(BenchmarkId::new("insert_column", size), &rows, |b, rows| {
			b.iter(|| {
				let mut table = Table::with_rows(open_capacity(), rows.clone(), |_, _| 0).unwrap();
				table.insert_column(size / 2, black_box(vec![1u16; size])).unwrap();
				black_box(table.column_count())
			});
		});
		group.bench_with_input(BenchmarkId::new("adjust_lengths", size), &rows, |b, rows| {
			b.iter(|| {
				let mut table = Table::with_rows(open_capacity(), rows.clone(), |_, _| 0).unwrap();
				table.adjust_lengths(size * 2, size * 2).unwrap();
				black_box(table.cell_count())
			});
		});
	}

	group.finish();
}

/// Benchmark notification overhead with a subscriber attached
fn bench_notification_overhead(c: &mut Criterion) {
	let mut group = c.benchmark_group("notification");

	group.bench_function("push_with_subscriber", |b| {
		b.iter(|| {
			let mut list = CapacityList::new(CapacityPolicy::Unbounded, |i| i as u32);
			list.subscribe(|change| {
				black_box(change);
			});
			for value in 0..1_000u32 {
				list.push(black_box(value)).unwrap();
			}
			black_box(list.len())
		});
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_list_insert_remove,
	bench_table_insert,
	bench_notification_overhead
);
criterion_main!(benches);
