//! Softview
//!
//! A CPU-only 2D rasterizer and view compositor. Every frame is painted into a plain
//! RGBA pixel buffer: filled and rounded rectangles, cubic Bezier strokes, supersampled
//! bitmap glyphs and scaled images, composed from a tree of views.
//!
//! # Features
//!
//! - **Rasterizer**: straight-alpha blending, rounded-rect border classification,
//!   point-sampled Bezier curves, nearest-neighbor scaling and a 3x3 blur
//! - **Views**: rectangles, hover panels, text and drag-to-scroll containers, drawn
//!   parent-first either directly or through per-node offscreen canvases
//! - **Headless**: window systems stay outside the crate behind [`platform::Presenter`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use softview::{App, Canvas, Color, Font, FrameInput, Rect, RenderConfig, View};
//!
//! let mut app = App::new(RenderConfig::default(), Arc::new(Font::builtin()), |ctx| {
//!     View::container(Rect::new(0.0, 0.0, ctx.width as f32, ctx.height as f32))
//!         .with_child(View::rect(Rect::new(4.0, 4.0, 8.0, 8.0), Color::RED))
//! });
//!
//! let mut frame = Canvas::new(0, 0);
//! let stats = app.update(&FrameInput::new(32, 32), &mut frame);
//! assert!(stats.rebuilt);
//! assert_eq!(frame.get_pixel(5, 5), Color::RED);
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

pub mod app;
pub mod demo;
pub mod error;
pub mod platform;
pub mod rendering;
pub mod views;

pub use app::{App, BuildContext, FrameStats};
pub use error::{Error, Result};
pub use platform::{FrameInput, HeadlessPresenter, Presenter};
pub use rendering::{Canvas, Color, Font, Point, Rect, Size, Snapshot};
pub use views::{draw_view, Axis, DrawContext, View, ViewKind};

/// How the view tree is composed into the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compositing {
    /// Every view paints straight into the framebuffer.
    #[default]
    Direct,
    /// Every view paints into its own transparent canvas, which is then composited
    /// into its parent. Children are clipped to their parent's rectangle.
    Offscreen,
}

/// Framebuffer dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Rendering configuration
///
/// Every field has a default, so a JSON document only needs the fields it changes.
///
/// # Examples
///
/// ```
/// let cfg = softview::RenderConfig::from_json(r#"{ "compositing": "offscreen" }"#).unwrap();
/// assert_eq!(cfg.compositing, softview::Compositing::Offscreen);
/// assert_eq!(cfg.glyph_supersample, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Initial framebuffer size
    pub viewport: Viewport,
    /// Color the framebuffer is cleared to every frame
    pub clear_color: Color,
    pub compositing: Compositing,
    /// Width of a vertical scrollbar track (height of a horizontal one)
    pub scrollbar_thickness: f32,
    pub track_color: Color,
    pub thumb_color: Color,
    /// Shortest allowed scrollbar thumb, in pixels
    pub min_thumb_length: f32,
    /// Squared-distance slack for classifying a pixel as on a rounded corner's arc
    pub border_tolerance: f32,
    /// Glyph coverage is sampled on an N x N grid per pixel
    pub glyph_supersample: u32,
    /// Bezier parameter step
    pub curve_step: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            clear_color: Color::from_argb(0xFF18_1818),
            compositing: Compositing::Direct,
            scrollbar_thickness: 10.0,
            track_color: Color::from_argb(0xFFEE_EEEE),
            thumb_color: Color::from_argb(0xFF68_6D76),
            min_thumb_length: 8.0,
            border_tolerance: rendering::raster::BORDER_TOLERANCE,
            glyph_supersample: rendering::text::DEFAULT_SUPERSAMPLE,
            curve_step: rendering::raster::CURVE_STEP,
        }
    }
}

impl RenderConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let problem = if self.viewport.width == 0 || self.viewport.height == 0 {
            Some(format!(
                "viewport must be non-zero, got {}x{}",
                self.viewport.width, self.viewport.height
            ))
        } else if !(1..=rendering::text::MAX_SUPERSAMPLE).contains(&self.glyph_supersample) {
            Some(format!(
                "glyph_supersample must be in 1..={}, got {}",
                rendering::text::MAX_SUPERSAMPLE,
                self.glyph_supersample
            ))
        } else if !(self.curve_step > 0.0 && self.curve_step <= 0.5) {
            Some(format!("curve_step must be in (0, 0.5], got {}", self.curve_step))
        } else if !(self.scrollbar_thickness >= 0.0) {
            Some(format!("scrollbar_thickness must be non-negative, got {}", self.scrollbar_thickness))
        } else if !(self.border_tolerance >= 0.0) {
            Some(format!("border_tolerance must be non-negative, got {}", self.border_tolerance))
        } else if !(self.min_thumb_length >= 0.0) {
            Some(format!("min_thumb_length must be non-negative, got {}", self.min_thumb_length))
        } else {
            None
        };

        match problem {
            Some(msg) => {
                warn!("rejecting render config: {}", msg);
                Err(Error::ConfigError(msg))
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = RenderConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.viewport, Viewport { width: 640, height: 480 });
        assert_eq!(cfg.track_color, Color::rgb(0xEE, 0xEE, 0xEE));
        assert_eq!(cfg.thumb_color.to_argb(), 0xFF68_6D76);
        assert_eq!(cfg.compositing, Compositing::Direct);
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let cfg = RenderConfig {
            compositing: Compositing::Offscreen,
            scrollbar_thickness: 6.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"offscreen\""));
        assert_eq!(RenderConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn empty_json_object_gives_defaults() {
        assert_eq!(RenderConfig::from_json("{}").unwrap(), RenderConfig::default());
    }

    #[test]
    fn invalid_values_are_config_errors() {
        for json in [
            r#"{ "viewport": { "width": 0, "height": 10 } }"#,
            r#"{ "glyph_supersample": 0 }"#,
            r#"{ "glyph_supersample": 17 }"#,
            r#"{ "curve_step": 0.0 }"#,
            r#"{ "curve_step": 0.75 }"#,
            r#"{ "scrollbar_thickness": -1.0 }"#,
            r#"{ "border_tolerance": -0.5 }"#,
            "not json",
        ] {
            let err = RenderConfig::from_json(json).unwrap_err();
            assert!(matches!(err, Error::ConfigError(_)), "{} -> {:?}", json, err);
        }
    }
}
