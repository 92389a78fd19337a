//! Benchmarks for tinct operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tinct_color::DeviceColor;
use tinct_core::Percentage;
use tinct_models::{ColorModel, Hsl, Hsv};

/// Benchmark literal parsing across the grammar shapes.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for literal in ["#F00", "#336699", "#12345678", "#0000FFFF0000", "rebeccapurple"] {
        group.bench_with_input(BenchmarkId::new("u8", literal), &literal, |b, l| {
            b.iter(|| black_box(l).parse::<DeviceColor<u8>>())
        });
        group.bench_with_input(BenchmarkId::new("u16", literal), &literal, |b, l| {
            b.iter(|| black_box(l).parse::<DeviceColor<u16>>())
        });
    }

    group.finish();
}

/// Benchmark model decompose/derive round trips.
fn bench_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("models");

    let colors: Vec<DeviceColor<u8>> = (0..1000)
        .map(|i| {
            DeviceColor::from_rgb_bytes((i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8)
        })
        .collect();
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("hsl_round_trip", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|c| Hsl::from_device(black_box(c)).to_device())
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("hsv_round_trip", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|c| Hsv::from_device(black_box(c)).to_device())
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark comparison and formatting.
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    let base: Vec<DeviceColor<u8>> = (0..1000)
        .map(|i| DeviceColor::from_rgb_bytes((i % 256) as u8, (i / 4 % 256) as u8, 128))
        .collect();
    let nudged: Vec<DeviceColor<u8>> = base
        .iter()
        .map(|c| DeviceColor::new(c.r.saturating_add(1), c.g, c.b, c.a))
        .collect();
    group.throughput(Throughput::Elements(base.len() as u64));

    group.bench_function("fuzzy_equals_5pct", |b| {
        let fuzz = Percentage::new(5.0);
        b.iter(|| {
            base.iter()
                .zip(&nudged)
                .filter(|(p, q)| p.fuzzy_equals(black_box(*q), fuzz))
                .count()
        })
    });

    group.bench_function("display", |b| {
        b.iter(|| base.iter().map(|c| black_box(c).to_string()).collect::<Vec<_>>())
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_models, bench_compare);
criterion_main!(benches);
