use criterion::{black_box, criterion_group, criterion_main, Criterion};

use livepreview::render::{build_document, Renderer};
use livepreview::session::LayoutPlan;
use livepreview::surface::InMemoryPreviewSurface;
use livepreview::Viewport;
use std::sync::Arc;

fn bench_build_document(c: &mut Criterion) {
    let input = "<h1>Title</h1>\n".to_string() + &"<p>paragraph</p>\n".repeat(50);

    c.bench_function("build_document", |b| {
        b.iter(|| build_document(black_box(&input)))
    });
}

fn bench_render_pass(c: &mut Criterion) {
    let preview = Arc::new(InMemoryPreviewSurface::new());
    let renderer = Renderer::new(preview);
    let input = "<p>hello preview</p>";

    c.bench_function("render_pass", |b| {
        b.iter(|| renderer.render(black_box(input)))
    });
}

fn bench_layout_plan(c: &mut Criterion) {
    let viewport = Viewport {
        width: 1920,
        height: 1080,
    };

    c.bench_function("layout_plan", |b| {
        b.iter(|| LayoutPlan::for_viewport(black_box(viewport)))
    });
}

criterion_group!(
    benches,
    bench_build_document,
    bench_render_pass,
    bench_layout_plan
);
criterion_main!(benches);
