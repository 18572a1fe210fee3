use std::num::NonZeroU32;

use criterion::{criterion_group, criterion_main, Criterion};

use mandelbrot_explorer::{render_serial, render_with_workers, HueGradient, PixelBuffer, Viewport};

const WIDTH: u32 = 256;
const HEIGHT: u32 = 256;
const MAX_ITERATIONS: u32 = 360;

fn bench_render_pass(c: &mut Criterion) {
    let viewport = Viewport::default_view();
    let gradient = HueGradient::new(MAX_ITERATIONS).unwrap();

    let mut group = c.benchmark_group("render_pass");

    group.bench_function("serial_256x256", |b| {
        let mut buffer = PixelBuffer::new(WIDTH, HEIGHT).unwrap();
        b.iter(|| render_serial(&viewport, &gradient, &mut buffer));
    });

    for workers in [1u32, 2, 4, 8] {
        group.bench_function(format!("tiled_256x256_{workers}_workers"), |b| {
            let mut buffer = PixelBuffer::new(WIDTH, HEIGHT).unwrap();
            let workers = NonZeroU32::new(workers).unwrap();
            b.iter(|| render_with_workers(&viewport, &gradient, &mut buffer, workers));
        });
    }

    group.finish();
}

fn bench_deep_zoom(c: &mut Criterion) {
    // A seahorse-valley view where most pixels exhaust the budget.
    let viewport = Viewport::new(-0.7525, -0.7495, 0.0485, 0.0515).unwrap();
    let gradient = HueGradient::new(MAX_ITERATIONS).unwrap();

    c.bench_function("deep_zoom_256x256", |b| {
        let mut buffer = PixelBuffer::new(WIDTH, HEIGHT).unwrap();
        b.iter(|| {
            mandelbrot_explorer::render(&viewport, &gradient, &mut buffer);
        });
    });
}

criterion_group!(benches, bench_render_pass, bench_deep_zoom);
criterion_main!(benches);
