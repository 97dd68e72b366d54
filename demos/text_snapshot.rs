//! Text snapshot example - rasterizes a string and prints its coverage as ASCII art

use softview::rendering::text::{draw_text, measure_text};
use softview::{Canvas, Color, Font, Point};

const RAMP: &[u8] = b" .:-=+*#%@";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = std::env::args().nth(1).unwrap_or_else(|| "Hello, softview!".to_string());
    let font = Font::builtin();

    for size in [7.0f32, 10.0] {
        let bounds = measure_text(&font, &text, size);
        let mut canvas = Canvas::new(bounds.width.ceil() as u32, bounds.height.ceil() as u32);
        draw_text(&mut canvas, &font, &text, size, Point::ZERO, Color::WHITE)?;

        println!("{:?} at {}px ({}x{})", text, size, canvas.width(), canvas.height());
        println!("{}", "=".repeat(canvas.width() as usize));
        for y in 0..canvas.height() as i32 {
            let line: String = (0..canvas.width() as i32)
                .map(|x| {
                    let a = canvas.get_pixel(x, y).a as usize;
                    RAMP[a * (RAMP.len() - 1) / 255] as char
                })
                .collect();
            println!("{}", line);
        }
        println!();
    }
    Ok(())
}
