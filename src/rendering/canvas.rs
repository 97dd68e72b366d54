//! The pixel buffer every rasterization routine draws into.

use std::io::Write;

use crate::rendering::color::Color;
use crate::{Error, Result};

/// A row-major RGBA pixel buffer.
///
/// Pixel access is bounds-checked: reads outside the canvas return
/// [`Color::TRANSPARENT`] and writes outside it are ignored. A canvas with a zero
/// dimension is allowed and behaves as an empty surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Allocates a canvas filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Wraps an already decoded pixel array (for example from an image decoder).
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::PixelBufferMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a canvas from tightly packed `RGBA8888` bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(Error::PixelBufferMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Color::rgba(c[0], c[1], c[2], c[3]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// A checkerboard of `block`-sized squares alternating between `a` and `b`.
    pub fn checkerboard(width: u32, height: u32, block: u32, a: Color, b: Color) -> Self {
        let block = block.max(1);
        let mut canvas = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let color = if (x / block + y / block) % 2 == 0 { a } else { b };
                canvas.pixels[(y * width + x) as usize] = color;
            }
        }
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Reads a pixel; out-of-bounds coordinates yield a transparent color.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        match self.index(x, y) {
            Some(i) => self.pixels[i],
            None => Color::TRANSPARENT,
        }
    }

    /// Composites `color` onto the pixel at `(x, y)`.
    ///
    /// Fully transparent colors and out-of-bounds coordinates are no-ops; opaque
    /// colors overwrite; anything else goes through [`Color::over`].
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if color.a == 0 {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = if color.a == 255 {
                color
            } else {
                Color::over(self.pixels[i], color)
            };
        }
    }

    /// Overwrites the pixel at `(x, y)` without blending.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Overwrites every pixel with `color`, bypassing blending.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Returns an independent copy of this canvas.
    pub fn duplicate(&self) -> Canvas {
        self.clone()
    }

    /// Multiplies every pixel's alpha by `opacity` (clamped to `[0, 1]`).
    pub fn fade(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        for p in &mut self.pixels {
            p.a = (p.a as f32 * opacity).round() as u8;
        }
    }

    /// Packs the canvas as `RGBA8888` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Writes the canvas as a binary `P6` PPM image. Alpha is dropped.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let rgb: Vec<u8> = self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect();
        out.write_all(&rgb)?;
        out.flush()?;
        Ok(())
    }
}
