//! # Frame Build Benchmark
//!
//! Measures one full frame (begin, widgets in several windows, end) and the
//! cost of draining the resulting command stream.
//!
//! Run with: `cargo bench --package tessera_ui`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tessera_ui::{Backend, Command, Context, FontId, Options, Rect, Response};

struct Metrics;

impl Backend for Metrics {
    fn text_width(&self, _font: FontId, text: &str) -> i32 {
        7 * i32::try_from(text.len()).unwrap_or(i32::MAX)
    }

    fn text_height(&self, _font: FontId) -> i32 {
        14
    }
}

/// Persistent application data bound to widgets.
struct Model {
    volume: f32,
    speed: f32,
    muted: bool,
    name: String,
}

impl Model {
    fn new() -> Self {
        Self {
            volume: 0.5,
            speed: 3.0,
            muted: false,
            name: String::from("bench"),
        }
    }
}

fn build_frame(ctx: &mut Context, model: &mut Model, windows: i32) {
    ctx.begin();
    for index in 0..windows {
        let title = format!("Window {index}");
        let rect = Rect::new(20 * index, 20 * index, 320, 400);
        if ctx.begin_window(&title, rect) {
            ctx.layout_row(2, Some(&[90, -1]), 0);
            ctx.label("Name");
            let _ = ctx.textbox(&mut model.name, 32);
            ctx.label("Volume");
            let _ = ctx.slider(&mut model.volume, 0.0, 1.0);
            ctx.label("Speed");
            let _ = ctx.number(&mut model.speed, 0.1);
            let _ = ctx.checkbox("Muted", &mut model.muted);
            let _ = ctx.button("Apply");

            if ctx
                .header_ex("Details", Options::EXPANDED)
                .contains(Response::ACTIVE)
            {
                ctx.text("The quick brown fox jumps over the lazy dog. ".repeat(4).as_str());
            }
            ctx.end_window();
        }
    }
    ctx.end();
}

fn bench_frame_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_build");
    for windows in [1, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(windows), &windows, |b, &windows| {
            let mut ctx = Context::default().with_backend(Metrics);
            let mut model = Model::new();
            b.iter(|| {
                build_frame(&mut ctx, &mut model, windows);
                black_box(ctx.command_buffer().len())
            });
        });
    }
    group.finish();
}

fn bench_command_drain(c: &mut Criterion) {
    let mut ctx = Context::default().with_backend(Metrics);
    let mut model = Model::new();
    build_frame(&mut ctx, &mut model, 16);

    c.bench_function("command_drain_16_windows", |b| {
        b.iter(|| {
            let mut rects = 0_usize;
            for command in ctx.commands() {
                if let Command::Rect { .. } = command {
                    rects += 1;
                }
            }
            black_box(rects)
        });
    });
}

criterion_group!(benches, bench_frame_build, bench_command_drain);
criterion_main!(benches);
