//! Text measurement and supersampled bitmap glyph rasterization.

use log::{error, trace, warn};

use crate::rendering::canvas::Canvas;
use crate::rendering::color::Color;
use crate::rendering::font::{BitmapFont, Font, Glyph};
use crate::rendering::geometry::{Point, Size};
use crate::{Error, Result};

/// Sub-pixel grid size (N x N samples per destination pixel).
pub const DEFAULT_SUPERSAMPLE: u32 = 3;

/// Largest accepted grid size; larger requests are clamped to it.
pub const MAX_SUPERSAMPLE: u32 = 16;

/// Extra space between consecutive glyphs, as a fraction of the point size.
pub const GLYPH_SPACING: f32 = 0.1;

/// Glyphs of `text` at `size` paired with the top-left corner of their scaled box.
fn layout<'a>(font: &'a BitmapFont, text: &str, size: f32, origin: Point) -> impl Iterator<Item = (&'a Glyph, Point)> + 'a {
    let scale = size / font.size() as f32;
    let gap = size * GLYPH_SPACING;
    let ascent = font.ascent();
    let codes: Vec<u8> = text.bytes().collect();
    let mut pen_x = origin.x;
    codes.into_iter().filter_map(move |code| {
        let Some(glyph) = font.glyph(code) else {
            trace!("no glyph for code {}", code);
            return None;
        };
        let top_left = Point::new(
            pen_x + glyph.x_offset as f32 * scale,
            origin.y + (ascent - glyph.y_offset - glyph.height as i32) as f32 * scale,
        );
        pen_x += glyph.advance as f32 * scale + gap;
        Some((glyph, top_left))
    })
}

/// Bounding box of `text` drawn at point `size`.
///
/// Width is the sum of scaled advances plus the inter-glyph gaps; height is the
/// tallest scaled glyph. Empty text and unsupported fonts measure as zero.
pub fn measure_text(font: &Font, text: &str, size: f32) -> Size {
    let font = match font {
        Font::Bitmap(font) => font,
        other => {
            warn!("measure_text: unsupported font format '{}'", other.format_name());
            return Size::ZERO;
        }
    };
    if size <= 0.0 {
        return Size::ZERO;
    }

    let scale = size / font.size() as f32;
    let gap = size * GLYPH_SPACING;
    let mut width = 0.0f32;
    let mut height = 0.0f32;
    let mut count = 0usize;
    for code in text.bytes() {
        if let Some(glyph) = font.glyph(code) {
            width += glyph.advance as f32 * scale;
            height = height.max(glyph.height as f32 * scale);
            count += 1;
        }
    }
    if count > 1 {
        width += gap * (count - 1) as f32;
    }
    Size::new(width, height)
}

/// Draws `text` with its top-left corner at `position` using a 3x3 coverage grid.
pub fn draw_text(canvas: &mut Canvas, font: &Font, text: &str, size: f32, position: Point, color: Color) -> Result<()> {
    draw_text_supersampled(canvas, font, text, size, position, color, DEFAULT_SUPERSAMPLE)
}

/// Draws `text`, estimating each pixel's glyph coverage from an `n x n` sample grid.
/// `n` is clamped to `1..=MAX_SUPERSAMPLE`.
///
/// The result is `mix(existing, color, coverage)` written straight into the canvas:
/// a linear blend rather than alpha compositing.
pub fn draw_text_supersampled(
    canvas: &mut Canvas,
    font: &Font,
    text: &str,
    size: f32,
    position: Point,
    color: Color,
    n: u32,
) -> Result<()> {
    let font = match font {
        Font::Bitmap(font) => font,
        other => {
            error!("draw_text: unsupported font format '{}'", other.format_name());
            return Err(Error::UnsupportedFont(other.format_name().to_string()));
        }
    };
    if size <= 0.0 || text.is_empty() {
        return Ok(());
    }

    let n = n.clamp(1, MAX_SUPERSAMPLE);
    let samples = (n * n) as f32;
    let scale = size / font.size() as f32;

    for (glyph, top_left) in layout(font, text, size, position) {
        let gw = (glyph.width as f32 * scale).ceil() as i32;
        let gh = (glyph.height as f32 * scale).ceil() as i32;
        let ox = top_left.x.floor() as i32;
        let oy = top_left.y.floor() as i32;

        for py in 0..gh {
            for px in 0..gw {
                let mut hits = 0u32;
                for sy in 0..n {
                    let gy = (py as f32 + (sy as f32 + 0.5) / n as f32) / scale;
                    for sx in 0..n {
                        let gx = (px as f32 + (sx as f32 + 0.5) / n as f32) / scale;
                        if glyph.bit(gx as u32, gy as u32) {
                            hits += 1;
                        }
                    }
                }
                if hits == 0 {
                    continue;
                }
                let (x, y) = (ox + px, oy + py);
                let coverage = hits as f32 / samples;
                let existing = canvas.get_pixel(x, y);
                canvas.set_pixel(x, y, Color::mix(existing, color, coverage));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_font() -> Font {
        // A 2x2 solid square and a 1x2 bar, native size 2.
        let mut font = BitmapFont::new(2, 2);
        font.insert(
            b'#',
            Glyph { width: 2, height: 2, x_offset: 0, y_offset: 0, advance: 3, rows: vec![0b1100_0000; 2] },
        );
        font.insert(
            b'|',
            Glyph { width: 1, height: 2, x_offset: 0, y_offset: 0, advance: 2, rows: vec![0b1000_0000; 2] },
        );
        Font::Bitmap(font)
    }

    #[test]
    fn measure_empty_text_is_zero() {
        assert_eq!(measure_text(&block_font(), "", 12.0), Size::ZERO);
        assert_eq!(measure_text(&Font::builtin(), "", 7.0), Size::ZERO);
    }

    #[test]
    fn measure_scales_advances_and_adds_gaps() {
        let s = measure_text(&block_font(), "#|", 4.0);
        // advances 3 + 2 scaled by 2, plus one gap of 0.4
        assert!((s.width - 10.4).abs() < 1e-4, "width {}", s.width);
        assert_eq!(s.height, 4.0);
    }

    #[test]
    fn unsupported_font_measures_zero_and_refuses_to_draw() {
        let font = Font::Outline(crate::rendering::font::OutlineFace { name: "Sans".into(), data: vec![] });
        assert_eq!(measure_text(&font, "hello", 12.0), Size::ZERO);
        let mut c = Canvas::new(8, 8);
        let before = c.duplicate();
        let err = draw_text(&mut c, &font, "hello", 12.0, Point::ZERO, Color::WHITE).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFont(_)));
        assert_eq!(c, before);
    }

    #[test]
    fn native_size_glyph_has_full_coverage() {
        let mut c = Canvas::new(8, 4);
        draw_text(&mut c, &block_font(), "#", 2.0, Point::new(1.0, 1.0), Color::RED).unwrap();
        assert_eq!(c.get_pixel(1, 1), Color::RED);
        assert_eq!(c.get_pixel(2, 2), Color::RED);
        assert_eq!(c.get_pixel(3, 1), Color::TRANSPARENT);
        assert_eq!(c.get_pixel(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn scaled_glyph_covers_scaled_box() {
        let mut c = Canvas::new(8, 8);
        draw_text(&mut c, &block_font(), "#", 6.0, Point::ZERO, Color::WHITE).unwrap();
        let painted = c.pixels().iter().filter(|p| **p == Color::WHITE).count();
        assert_eq!(painted, 36);
    }

    #[test]
    fn partial_coverage_mixes_with_existing_pixel() {
        // Scale 1.5: the bar is 1.5 px wide, so the second column is partly covered.
        let mut c = Canvas::new(4, 4);
        c.clear(Color::BLACK);
        draw_text(&mut c, &block_font(), "|", 3.0, Point::ZERO, Color::WHITE).unwrap();
        assert_eq!(c.get_pixel(0, 0), Color::WHITE);
        let edge = c.get_pixel(1, 0);
        assert!(edge.r > 0 && edge.r < 255, "edge {:?}", edge);
        assert_eq!(edge.a, 255);
    }

    #[test]
    fn huge_sample_grid_is_clamped() {
        let mut clamped = Canvas::new(8, 8);
        let mut max = Canvas::new(8, 8);
        draw_text_supersampled(&mut clamped, &block_font(), "|", 3.0, Point::ZERO, Color::WHITE, u32::MAX).unwrap();
        draw_text_supersampled(&mut max, &block_font(), "|", 3.0, Point::ZERO, Color::WHITE, MAX_SUPERSAMPLE).unwrap();
        assert_eq!(clamped, max);
    }

    #[test]
    fn pen_advances_between_glyphs() {
        let mut c = Canvas::new(16, 4);
        draw_text(&mut c, &block_font(), "##", 2.0, Point::ZERO, Color::WHITE).unwrap();
        // second glyph starts at 3 + gap 0.2 -> column 3
        assert_eq!(c.get_pixel(3, 0), Color::WHITE);
        assert_eq!(c.get_pixel(2, 0), Color::TRANSPARENT);
    }
}
