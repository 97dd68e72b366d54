use std::sync::Arc;

use softview::{demo, App, Canvas, Color, Font, FrameInput, HeadlessPresenter, Presenter, Rect, RenderConfig, Snapshot, View};

#[test]
fn frame_loop_presents_every_frame() {
    let mut app = demo::app(RenderConfig::default());
    let mut frame = Canvas::new(0, 0);
    let mut presenter = HeadlessPresenter::new();

    for _ in 0..3 {
        app.update(&FrameInput::new(160, 120), &mut frame);
        presenter.present(&frame).unwrap();
    }
    assert_eq!(presenter.presented(), 3);
    let last = presenter.last_frame().unwrap();
    assert_eq!(Snapshot::of(last), Snapshot::of(&frame));
}

#[test]
fn resize_rebuilds_tree_to_new_size() {
    let mut app = App::new(RenderConfig::default(), Arc::new(Font::builtin()), |ctx| {
        // full-width bar along the bottom row
        View::rect(Rect::new(0.0, ctx.height as f32 - 1.0, ctx.width as f32, 1.0), Color::WHITE)
    });
    let mut frame = Canvas::new(0, 0);

    let first = app.update(&FrameInput::new(30, 20), &mut frame);
    assert!(first.rebuilt);
    assert_eq!(frame.get_pixel(29, 19), Color::WHITE);

    let same = app.update(&FrameInput::new(30, 20), &mut frame);
    assert!(!same.rebuilt);

    let resized = app.update(&FrameInput::new(50, 40), &mut frame);
    assert!(resized.rebuilt);
    assert_eq!(resized.frame_index, 2);
    assert_eq!((frame.width(), frame.height()), (50, 40));
    assert_eq!(frame.get_pixel(49, 39), Color::WHITE);
    assert_eq!(frame.get_pixel(29, 19), app.config().clear_color);
}

#[test]
fn scroll_state_survives_frames_but_not_rebuilds() {
    let mut app = demo::app(RenderConfig::default());
    let mut frame = Canvas::new(0, 0);
    // list track: x 114..124, y 40..120 at 256x128
    let drag = FrameInput::new(256, 128).with_pointer(120.0, 120.0).with_left_down(true);
    app.update(&drag, &mut frame);
    app.update(&FrameInput::new(256, 128), &mut frame);
    let first_row = |app: &App| app.tree().unwrap().children()[1].children()[0].rect.y;
    assert!(first_row(&app) < 0.0);

    app.update(&FrameInput::new(256, 129), &mut frame);
    assert_eq!(first_row(&app), 0.0);
}
