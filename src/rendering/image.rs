//! Image compositing: scaled/cropped blits, nearest-neighbor resampling and blur.

use crate::rendering::canvas::Canvas;
use crate::rendering::color::Color;
use crate::rendering::geometry::Rect;

/// 3x3 blur weights (they sum to 16).
const BLUR_KERNEL: [[u32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// Composites `source` onto `background` inside `dest`.
///
/// Every destination pixel is mapped back into the source through independent x/y
/// scale factors `crop.w / dest.w` and `crop.h / dest.h`. Source samples outside the
/// source bounds leave the destination untouched. `crop` defaults to the whole source.
pub fn draw_image(background: &mut Canvas, source: &Canvas, dest: Rect, crop: Option<Rect>) {
    if dest.is_empty() || source.is_empty() || background.is_empty() {
        return;
    }
    let crop = crop.unwrap_or_else(|| Rect::new(0.0, 0.0, source.width() as f32, source.height() as f32));
    let sx = crop.w / dest.w;
    let sy = crop.h / dest.h;

    let x0 = (dest.x.floor() as i32).max(0);
    let y0 = (dest.y.floor() as i32).max(0);
    let x1 = (dest.right().floor() as i32).min(background.width() as i32);
    let y1 = (dest.bottom().floor() as i32).min(background.height() as i32);

    for y in y0..y1 {
        let src_y = (crop.y + (y as f32 - dest.y) * sy).floor() as i32;
        if src_y < 0 || src_y >= source.height() as i32 {
            continue;
        }
        for x in x0..x1 {
            let src_x = (crop.x + (x as f32 - dest.x) * sx).floor() as i32;
            if src_x < 0 || src_x >= source.width() as i32 {
                continue;
            }
            background.put_pixel(x, y, source.get_pixel(src_x, src_y));
        }
    }
}

impl Canvas {
    /// Nearest-neighbor resample to `round(width * sx) x round(height * sy)`.
    pub fn scale(&self, sx: f32, sy: f32) -> Canvas {
        let w = (self.width() as f32 * sx).round().max(0.0) as u32;
        let h = (self.height() as f32 * sy).round().max(0.0) as u32;
        let mut out = Canvas::new(w, h);
        if w == 0 || h == 0 {
            return out;
        }
        for y in 0..h {
            let src_y = (y as f32 / sy).floor() as i32;
            for x in 0..w {
                let src_x = (x as f32 / sx).floor() as i32;
                out.set_pixel(x as i32, y as i32, self.get_pixel(src_x, src_y));
            }
        }
        out
    }

    /// Returns a blurred copy using a 3x3 Gaussian-like kernel.
    ///
    /// Samples outside the canvas count as transparent, so edges fade out.
    pub fn blur(&self) -> Canvas {
        let mut out = Canvas::new(self.width(), self.height());
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let mut acc = [0u32; 4];
                for (ky, row) in BLUR_KERNEL.iter().enumerate() {
                    for (kx, weight) in row.iter().enumerate() {
                        let p = self.get_pixel(x + kx as i32 - 1, y + ky as i32 - 1);
                        for (a, c) in acc.iter_mut().zip(p.to_array()) {
                            *a += c as u32 * weight;
                        }
                    }
                }
                let [r, g, b, a] = acc.map(|v| ((v + 8) / 16) as u8);
                out.set_pixel(x, y, Color::rgba(r, g, b, a));
            }
        }
        out
    }
}
