use std::fs;
use std::path::PathBuf;

use softview::{demo, Canvas, Color, Compositing, FrameInput, RenderConfig, Snapshot};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn render_demo(config: RenderConfig) -> Canvas {
    let mut app = demo::app(config);
    let mut frame = Canvas::new(0, 0);
    app.update(&FrameInput::new(256, 128).with_pointer(200.0, 80.0), &mut frame);
    demo::draw_overlay(&mut frame, app.config());
    frame
}

#[test]
fn demo_frame_is_deterministic() {
    let a = Snapshot::of(&render_demo(RenderConfig::default()));
    let b = Snapshot::of(&render_demo(RenderConfig::default()));
    assert_eq!(a, b);
    assert_eq!((a.width, a.height), (256, 128));
}

#[test]
fn compositing_modes_agree_on_opaque_regions() {
    let direct = render_demo(RenderConfig::default());
    let offscreen = render_demo(RenderConfig {
        compositing: Compositing::Offscreen,
        ..Default::default()
    });
    // header fill, list row and scrollbar track are opaque in both modes
    for (x, y) in [(60, 12), (20, 44), (118, 110)] {
        assert_eq!(direct.get_pixel(x, y), offscreen.get_pixel(x, y), "pixel {},{}", x, y);
    }
}

#[test]
fn demo_frame_landmarks() {
    let frame = render_demo(RenderConfig::default());
    let rgb = |v: u32| Color::from_argb(0xFF00_0000 | v);
    for ((x, y), expected) in [
        // header fill and the first ink pixel of the title
        ((60, 12), rgb(0x2D_3250)),
        ((17, 16), rgb(0xF0_F0F0)),
        // rounded corner leaves the checkerboard visible
        ((8, 8), rgb(0x20_2020)),
        // first row and its label
        ((14, 47), rgb(0x31_3338)),
        ((15, 47), rgb(0xF0_F0F0)),
        // thumb covers a third of the track, rounded up to whole pixels
        ((118, 66), rgb(0x68_6D76)),
        ((118, 67), rgb(0xEE_EEEE)),
        // hovered card with its label
        ((200, 80), rgb(0xF6_B17A)),
        ((142, 50), Color::BLACK),
        // curve overlay starts at the bottom-left corner
        ((0, 126), rgb(0x7F_C8A9)),
    ] {
        assert_eq!(frame.get_pixel(x, y), expected, "pixel {},{}", x, y);
    }
}

#[test]
fn golden_demo_frame_matches_fixture() {
    let snapshot = Snapshot::of(&render_demo(RenderConfig::default()));

    let expected_path = golden_path("demo_frame.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &snapshot.digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(snapshot.digest, expected.trim());
}
