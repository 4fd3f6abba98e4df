//! Benchmarks for grid layout computation.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_sign_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gaugegrid::layout_grid;

/// Benchmark a typical dashboard panel with a handful of gauges
fn bench_small_panel(c: &mut Criterion) {
    c.bench_function("layout_small_panel", |b| {
        b.iter(|| {
            layout_grid(black_box(400.0), black_box(200.0), black_box(4))
                .expect("Failed to compute layout")
        })
    });
}

/// Compare layout cost across gauge counts
fn bench_grid_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_count_comparison");

    for count in [1, 16, 256, 4096] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("layout", count), &count, |b, &count| {
            b.iter(|| {
                layout_grid(black_box(1920.0), black_box(1080.0), black_box(count))
                    .expect("Failed to compute layout")
            })
        });
    }

    group.finish();
}

/// Benchmark hit testing across a large grid
fn bench_cell_at(c: &mut Criterion) {
    let layout = layout_grid(1920.0, 1080.0, 4096).expect("Failed to compute layout");

    c.bench_function("cell_at_large_grid", |b| {
        b.iter(|| layout.cell_at(black_box(1234.5), black_box(678.9), 1920.0, 1080.0))
    });
}

criterion_group!(benches, bench_small_panel, bench_grid_counts, bench_cell_at);

criterion_main!(benches);
