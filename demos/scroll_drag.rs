//! Drags the demo list's scrollbar from top to bottom and prints the scroll state.

use softview::{demo, Canvas, FrameInput, RenderConfig, ViewKind};

fn main() {
    let config = RenderConfig::default();
    let mut app = demo::app(config);
    let mut frame = Canvas::new(0, 0);
    let (width, height) = (256, 128);

    app.update(&FrameInput::new(width, height), &mut frame);
    let Some(track) = list_track(&app) else {
        eprintln!("demo scene has no scroll list");
        return;
    };

    let (x, top) = (track.x + track.w / 2.0, track.y);
    for step in 0..=8 {
        let y = top + track.h * step as f32 / 8.0;
        let input = FrameInput::new(width, height).with_pointer(x, y).with_left_down(true);
        app.update(&input, &mut frame);
        if let Some(tree) = app.tree() {
            let list = &tree.children()[1];
            if let ViewKind::Scroll(state) = list.kind() {
                println!(
                    "pointer y={:6.1}  scroll={:.3}  first row y={:7.1}  thumb={:?}",
                    y,
                    state.scroll(),
                    list.children()[0].rect.y,
                    state.thumb()
                );
            }
        }
    }
}

/// The list's track in framebuffer coordinates.
fn list_track(app: &softview::App) -> Option<softview::Rect> {
    let list = app.tree()?.children().get(1)?;
    match list.kind() {
        ViewKind::Scroll(state) => Some(state.track().translate(list.absolute_rect().origin())),
        _ => None,
    }
}
