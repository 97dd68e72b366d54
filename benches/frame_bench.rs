use criterion::{criterion_group, criterion_main, Criterion};

use softview::{demo, Canvas, Compositing, FrameInput, RenderConfig};

fn bench_demo_frame(c: &mut Criterion) {
    for (name, compositing) in [("demo_frame_direct", Compositing::Direct), ("demo_frame_offscreen", Compositing::Offscreen)] {
        let mut app = demo::app(RenderConfig { compositing, ..Default::default() });
        let mut frame = Canvas::new(0, 0);
        let input = FrameInput::new(640, 480).with_pointer(400.0, 200.0);
        app.update(&input, &mut frame);

        c.bench_function(name, |b| {
            b.iter(|| app.update(&input, &mut frame))
        });
    }
}

criterion_group!(benches, bench_demo_frame);
criterion_main!(benches);
