#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line, circle and brush rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rasterkit::prelude::*;
use rasterkit::render::{bresenham, dda};

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    for length in [10, 100, 1_000, 10_000] {
        let start = PixelCoord::new(0, 0);
        let end = PixelCoord::new(length, length / 3);

        group.bench_with_input(BenchmarkId::new("dda", length), &end, |b, &end| {
            b.iter(|| dda(black_box(start), black_box(end)));
        });
        group.bench_with_input(BenchmarkId::new("bresenham", length), &end, |b, &end| {
            b.iter(|| bresenham(black_box(start), black_box(end)));
        });
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    for radius in [5.0, 50.0, 500.0] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| rasterize_circle(black_box(Point::new(1000.0, 1000.0)), black_box(radius)));
        });
    }

    group.finish();
}

fn brush_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("brush");

    let polygon = |thickness| {
        make_shape(
            ShapeKind::Polygon,
            vec![Point::new(10.0, 10.0), Point::new(400.0, 60.0), Point::new(200.0, 300.0)],
            None,
            thickness,
            Rgba::BLUE,
        )
        .expect("polygon should be valid")
    };

    for thickness in [1, 3, 7, 15] {
        let shape = polygon(thickness);
        group.bench_with_input(BenchmarkId::from_parameter(thickness), &shape, |b, shape| {
            b.iter(|| rasterize(black_box(shape), LineAlgorithm::Bresenham));
        });
    }

    group.finish();
}

fn render_benchmark(c: &mut Criterion) {
    let mut editor = Editor::default();
    for i in 0..50 {
        let offset = f64::from(i) * 3.0;
        editor
            .draw_shape(
                ShapeKind::Line,
                vec![Point::new(offset, 0.0), Point::new(159.0 - offset, 119.0)],
                None,
            )
            .expect("line should be valid");
        editor
            .draw_shape(ShapeKind::Circle, vec![Point::new(80.0, 60.0)], Some(f64::from(i)))
            .expect("circle should be valid");
    }
    let mut canvas = editor.new_canvas().expect("canvas creation should succeed");

    c.bench_function("editor_render_800x600", |b| {
        b.iter(|| editor.render(black_box(&mut canvas)));
    });
}

criterion_group!(benches, line_benchmark, circle_benchmark, brush_benchmark, render_benchmark);
criterion_main!(benches);
