use criterion::{black_box, criterion_group, criterion_main, Criterion};
use led_sprite::core::{reference_palette, reference_sprite};
use led_sprite::engine::{MemorySurface, RenderLoop, Surface};
use led_sprite::term::{FrameBuffer, PanelView, Viewport};

fn reference_loop() -> RenderLoop {
    RenderLoop::new(reference_sprite().unwrap(), reference_palette().unwrap()).unwrap()
}

fn bench_render_frame(c: &mut Criterion) {
    let render = reference_loop();
    let mut surface = MemorySurface::new(32, 32);
    let offset = render.offset_for(&surface);

    c.bench_function("render_frame_32x32", |b| {
        b.iter(|| render.render_frame(black_box(&mut surface), offset))
    });
}

fn bench_render_and_submit(c: &mut Criterion) {
    let render = reference_loop();
    let mut surface = Some(MemorySurface::new(32, 32));

    c.bench_function("render_and_submit_32x32", |b| {
        b.iter(|| {
            let mut s = surface.take().unwrap();
            let offset = render.offset_for(&s);
            render.render_frame(&mut s, offset);
            surface = Some(s.submit().unwrap());
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    let sprite = reference_sprite().unwrap();
    let palette = reference_palette().unwrap();

    c.bench_function("validate_reference_sprite", |b| {
        b.iter(|| black_box(&sprite).validate(black_box(&palette)))
    });
}

fn bench_panel_view(c: &mut Criterion) {
    let render = reference_loop();
    let mut surface = MemorySurface::new(32, 32);
    let offset = render.offset_for(&surface);
    render.render_frame(&mut surface, offset);

    let view = PanelView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("panel_view_render_into", |b| {
        b.iter(|| view.render_into(black_box(surface.pixels()), 32, 32, viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_render_frame,
    bench_render_and_submit,
    bench_validate,
    bench_panel_view
);
criterion_main!(benches);
