//! Criterion benchmarks for batch parsing and rendering.

use std::fmt::Write;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use karst_bench::reference_terrain;
use karst_io::{read_expected, render_cells, BatchReader};

/// Build a batch text of `cases` rendered 100x100 terrains.
fn batch_text(cases: usize) -> String {
    let mut text = format!("{cases}\n");
    for seed in 0..cases as u64 {
        let terrain = reference_terrain(seed);
        let (rows, cols) = terrain.dimensions();
        writeln!(text, "{rows}\n{cols}\n{}", render_cells(&terrain)).unwrap();
    }
    text
}

fn bench_parse_batch(c: &mut Criterion) {
    let text = batch_text(20);

    c.bench_function("parse_batch_20x10k", |b| {
        b.iter(|| {
            let terrains = BatchReader::open(text.as_bytes())
                .unwrap()
                .read_all()
                .unwrap();
            black_box(terrains.len());
        });
    });
}

fn bench_render_10k(c: &mut Criterion) {
    let terrain = reference_terrain(42);

    c.bench_function("render_10k", |b| {
        b.iter(|| {
            let rendered = render_cells(&terrain);
            black_box(rendered.len());
        });
    });
}

fn bench_read_expected_1000(c: &mut Criterion) {
    let mut text = String::new();
    for case in 1..=1000u64 {
        writeln!(text, "{case} {}", case % 40).unwrap();
    }

    c.bench_function("read_expected_1000", |b| {
        b.iter(|| {
            let steps = read_expected(text.as_bytes()).unwrap();
            black_box(steps.len());
        });
    });
}

criterion_group!(
    benches,
    bench_parse_batch,
    bench_render_10k,
    bench_read_expected_1000
);
criterion_main!(benches);
