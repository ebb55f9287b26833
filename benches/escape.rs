use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num::Complex;

use mandelbrot::escape::escape;
use mandelbrot::render::TiledRenderer;
use mandelbrot::surface::FrameBuffer;
use std::time::Duration;

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape interior", |b| {
        b.iter(|| escape(black_box(Complex::new(0.0, 0.0)), black_box(1000)))
    });
    c.bench_function("escape exterior", |b| {
        b.iter(|| escape(black_box(Complex::new(-2.0, -2.0)), black_box(1000)))
    });
    c.bench_function("escape near boundary", |b| {
        b.iter(|| escape(black_box(Complex::new(-0.75, 0.05)), black_box(1000)))
    });
}

fn bench_reference_render(c: &mut Criterion) {
    let renderer = TiledRenderer::new(64, 64, 250, 1, Duration::from_millis(1));
    c.bench_function("reference render 64x64", |b| {
        b.iter(|| {
            let mut surface = FrameBuffer::new(64, 64);
            renderer.render_reference(&mut surface);
            surface
        })
    });
}

criterion_group!(benches, bench_escape, bench_reference_render);
criterion_main!(benches);
