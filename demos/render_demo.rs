//! Render the demo scene to `demo.ppm` with the pointer hovering the card.

use std::fs::File;
use std::io::BufWriter;

use softview::{demo, Canvas, FrameInput, RenderConfig, Snapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RenderConfig::default();
    let (width, height) = (config.viewport.width, config.viewport.height);
    let mut app = demo::app(config);
    let mut frame = Canvas::new(width, height);

    let stats = app.update(&FrameInput::new(width, height).with_pointer(480.0, 240.0), &mut frame);
    demo::draw_overlay(&mut frame, app.config());
    println!("drew {} views (rebuilt: {})", stats.views_drawn, stats.rebuilt);

    frame.write_ppm(BufWriter::new(File::create("demo.ppm")?))?;
    println!("wrote demo.ppm, sha256 {}", Snapshot::of(&frame).digest);
    Ok(())
}
