//! Error types for the rasterizer and view compositor

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building canvases, drawing text or loading configuration.
///
/// Out-of-bounds pixel access is never an error: reads return a transparent color and
/// writes are dropped.
#[derive(Error, Debug)]
pub enum Error {
    /// A pixel buffer was requested with a zero dimension
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A pixel array does not match the declared dimensions
    #[error("Pixel buffer has {actual} elements, expected {expected}")]
    PixelBufferMismatch { expected: usize, actual: usize },

    /// The font format cannot be rasterized by this crate
    #[error("Unsupported font format: {0}")]
    UnsupportedFont(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Writing a frame dump failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{draw_text, Canvas, Color, Font, OutlineFace, Point};
    use crate::RenderConfig;

    #[test]
    fn every_variant_comes_from_a_real_failure() {
        let mut canvas = Canvas::new(4, 4);
        let outline = Font::Outline(OutlineFace { name: "Sans".into(), data: Vec::new() });
        let errors = [
            Canvas::from_pixels(0, 4, Vec::new()).unwrap_err(),
            Canvas::from_rgba_bytes(1, 1, &[0, 0, 0]).unwrap_err(),
            draw_text(&mut canvas, &outline, "a", 8.0, Point::ZERO, Color::BLACK).unwrap_err(),
            RenderConfig::from_json("[").unwrap_err(),
            Error::from(std::io::Error::other("disk full")),
        ];
        for err in &errors {
            // No wildcard arm: a new variant has to show up here with its source.
            let expected = match err {
                Error::InvalidDimensions { .. } => "Invalid canvas dimensions: 0x4",
                Error::PixelBufferMismatch { .. } => "Pixel buffer has 3 elements, expected 4",
                Error::UnsupportedFont(_) => "Unsupported font format: outline",
                Error::ConfigError(_) => "Invalid configuration",
                Error::Io(_) => "I/O error: disk full",
            };
            assert!(err.to_string().starts_with(expected), "{}", err);
        }
    }
}
