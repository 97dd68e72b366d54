//! Rendering primitives: colors, canvases, shapes, images and bitmap text.

pub mod canvas;
pub mod color;
pub mod font;
pub mod geometry;
pub mod image;
pub mod raster;
pub mod text;

use sha2::{Digest, Sha256};

pub use canvas::Canvas;
pub use color::Color;
pub use font::{BitmapFont, Font, Glyph, OutlineFace};
pub use geometry::{BezierCurve, Point, Rect, Size};
pub use image::draw_image;
pub use raster::{
    classify_rounded, draw_curve, draw_curve_with_step, draw_rect, draw_rounded_rect,
    draw_rounded_rect_bordered, draw_rounded_rect_with, BorderCheck, RoundedStyle,
};
pub use text::{draw_text, draw_text_supersampled, measure_text};

/// Content-addressed summary of a rendered frame, used by golden tests and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    /// Hex-encoded SHA-256 of the frame's RGBA bytes.
    pub digest: String,
}

impl Snapshot {
    pub fn of(canvas: &Canvas) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(canvas.width().to_le_bytes());
        hasher.update(canvas.height().to_le_bytes());
        hasher.update(canvas.to_rgba_bytes());
        Self {
            width: canvas.width(),
            height: canvas.height(),
            digest: hex::encode(hasher.finalize()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_tracks_pixel_changes() {
        let mut c = Canvas::new(16, 8);
        let a = Snapshot::of(&c);
        assert_eq!((a.width, a.height), (16, 8));
        assert_eq!(a.digest.len(), 64);
        assert_eq!(a, Snapshot::of(&c.duplicate()));

        c.put_pixel(3, 3, Color::RED);
        assert_ne!(a.digest, Snapshot::of(&c).digest);
    }

    #[test]
    fn snapshot_distinguishes_dimensions() {
        assert_ne!(Snapshot::of(&Canvas::new(4, 2)).digest, Snapshot::of(&Canvas::new(2, 4)).digest);
    }
}
