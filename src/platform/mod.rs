//! Platform seam: the per-frame input snapshot and frame presentation.
//!
//! Window systems (Wayland, Win32, ...) live outside this crate. They hand a
//! [`FrameInput`] to the application each frame and receive the painted canvas back
//! through a [`Presenter`].

pub mod headless;

pub use headless::HeadlessPresenter;

use crate::rendering::{Canvas, Point};
use crate::Result;

/// Input state sampled by the platform layer once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer position in framebuffer coordinates.
    pub pointer: Point,
    pub left_down: bool,
    pub right_down: bool,
    /// Seconds since the previous frame.
    pub delta_time: f64,
    /// Current framebuffer size. A change means the view tree must be rebuilt.
    pub width: u32,
    pub height: u32,
}

impl FrameInput {
    /// An idle snapshot (pointer at the origin, no buttons) for a `width x height` frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer = Point::new(x, y);
        self
    }

    pub fn with_left_down(mut self, down: bool) -> Self {
        self.left_down = down;
        self
    }
}

/// Receives finished frames, e.g. by copying them into a window's shared buffer.
pub trait Presenter {
    fn present(&mut self, frame: &Canvas) -> Result<()>;
}
