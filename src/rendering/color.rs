//! RGBA colors and the `over` compositing operator.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel color with non-premultiplied alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// A fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Decodes a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Color {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Encodes this color as `0xAARRGGBB`.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Channels in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Color { r, g, b, a }
    }

    /// Returns the same color with its alpha replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Composites `top` over `bottom`.
    ///
    /// `out_a = top_a + bottom_a * (1 - top_a)` and every color channel is the
    /// alpha-weighted average of the two inputs divided by `out_a`. Two fully
    /// transparent inputs yield [`Color::TRANSPARENT`].
    pub fn over(bottom: Color, top: Color) -> Color {
        if top.a == 255 {
            return top;
        }
        if top.a == 0 {
            return bottom;
        }

        let ta = top.a as f32 / 255.0;
        let ba = bottom.a as f32 / 255.0;
        let out_a = ta + ba * (1.0 - ta);
        if out_a <= 0.0 {
            return Color::TRANSPARENT;
        }

        let channel = |t: u8, b: u8| -> u8 {
            let v = (t as f32 * ta + b as f32 * ba * (1.0 - ta)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };

        Color {
            r: channel(top.r, bottom.r),
            g: channel(top.g, bottom.g),
            b: channel(top.b, bottom.b),
            a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Linear blend of every channel (alpha included): `a + (b - a) * t`, `t` clamped to `[0, 1]`.
    pub fn mix(a: Color, b: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |x: u8, y: u8| -> u8 {
            (x as f32 + (y as f32 - x as f32) * t).round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: lerp(a.r, b.r),
            g: lerp(a.g, b.g),
            b: lerp(a.b, b.b),
            a: lerp(a.a, b.a),
        }
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_round_trip_matches_named_constants() {
        assert_eq!(Color::from_argb(0xFFFF0000), Color::RED);
        assert_eq!(Color::from_argb(0xFFFF00FF), Color::MAGENTA);
        assert_eq!(Color::from_argb(0), Color::TRANSPARENT);
        assert_eq!(Color::rgba(1, 2, 3, 4).to_argb(), 0x04010203);
    }

    #[test]
    fn over_with_transparent_top_keeps_bottom() {
        let bottom = Color::rgba(10, 20, 30, 128);
        assert_eq!(Color::over(bottom, Color::rgba(200, 200, 200, 0)), bottom);
    }

    #[test]
    fn over_with_opaque_top_replaces_bottom() {
        let top = Color::rgb(1, 2, 3);
        let out = Color::over(Color::rgba(90, 90, 90, 17), top);
        assert_eq!(out, top);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn over_half_white_on_opaque_black() {
        let out = Color::over(Color::BLACK, Color::rgba(255, 255, 255, 128));
        assert_eq!(out.a, 255);
        assert!(out.r == 128 || out.r == 127, "got {}", out.r);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
    }

    #[test]
    fn over_on_transparent_bottom_keeps_top_color() {
        let top = Color::rgba(40, 80, 120, 100);
        let out = Color::over(Color::TRANSPARENT, top);
        assert_eq!(out, top);
    }

    #[test]
    fn mix_endpoints() {
        let a = Color::rgba(0, 0, 0, 0);
        let b = Color::rgba(200, 100, 50, 255);
        assert_eq!(Color::mix(a, b, 0.0), a);
        assert_eq!(Color::mix(a, b, 1.0), b);
        assert_eq!(Color::mix(a, b, 0.5), Color::rgba(100, 50, 25, 128));
    }
}
