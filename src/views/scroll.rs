//! Scroll container state: content extents, thumb dragging and scrollbar geometry.

use log::trace;

use super::{DrawContext, Paint, PaintArea, View};
use crate::rendering::raster::draw_rect;
use crate::rendering::{Canvas, Point, Rect};

/// Direction in which a scroll container's children are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    fn along(self, rect: &Rect) -> (f32, f32) {
        match self {
            Axis::Horizontal => (rect.x, rect.w),
            Axis::Vertical => (rect.y, rect.h),
        }
    }

    fn pick(self, p: Point) -> f32 {
        match self {
            Axis::Horizontal => p.x,
            Axis::Vertical => p.y,
        }
    }

    fn shift(self, rect: &mut Rect, delta: f32) {
        match self {
            Axis::Horizontal => rect.x += delta,
            Axis::Vertical => rect.y += delta,
        }
    }
}

/// Content measurements along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extents {
    /// Largest single child.
    pub item: f32,
    /// Sum of all children.
    pub total: f32,
    /// The container itself.
    pub container: f32,
}

impl Extents {
    pub fn measure(axis: Axis, container: &Rect, children: &[View]) -> Self {
        let mut item = 0.0f32;
        let mut total = 0.0f32;
        for child in children {
            let (_, len) = axis.along(&child.rect);
            item = item.max(len);
            total += len;
        }
        Self {
            item,
            total,
            container: axis.along(container).1,
        }
    }

    /// Distance the children travel as the scroll value goes from 0 to 1.
    pub fn range(&self) -> f32 {
        (self.total - self.container + self.item).max(0.0)
    }
}

/// Scroll state of a scroll container, plus the scrollbar geometry computed on the
/// last frame (relative to the container's top-left corner).
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollView {
    axis: Axis,
    scroll: f32,
    track: Rect,
    thumb: Rect,
}

impl ScrollView {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            scroll: 0.0,
            track: Rect::default(),
            thumb: Rect::default(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Normalized scroll position in `[0, 1]`.
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    pub fn thumb(&self) -> Rect {
        self.thumb
    }

    /// Moves to `target` (clamped to `[0, 1]`), translating every child by
    /// `(old - new) * extents.range()` along the axis. Translation is incremental, so
    /// children keep any displacement applied earlier.
    pub fn scroll_to(&mut self, target: f32, children: &mut [View], extents: &Extents) {
        let target = if target.is_nan() { self.scroll } else { target.clamp(0.0, 1.0) };
        let delta = (self.scroll - target) * extents.range();
        if delta != 0.0 {
            for child in children.iter_mut() {
                self.axis.shift(&mut child.rect, delta);
            }
        }
        trace!("scroll {:.3} -> {:.3} (delta {:.1}px)", self.scroll, target, delta);
        self.scroll = target;
    }

    /// Per-frame step: lays out the scrollbar for a container at `absolute` and applies
    /// a thumb drag if the left button is down over the track.
    pub(crate) fn update(&mut self, absolute: Rect, children: &mut [View], ctx: &DrawContext<'_>) {
        let extents = Extents::measure(self.axis, &absolute, children);
        self.track = track_rect(self.axis, &absolute, ctx.config.scrollbar_thickness);

        let (track_start, track_len) = self.axis.along(&self.track.translate(absolute.origin()));
        let input = ctx.input;
        if input.left_down && track_len > 0.0 && self.track.translate(absolute.origin()).contains(input.pointer) {
            let target = (self.axis.pick(input.pointer) - track_start) / track_len;
            self.scroll_to(target, children, &extents);
        }

        self.thumb = thumb_rect(self.axis, &self.track, self.scroll, &extents, ctx.config.min_thumb_length);
    }
}

impl Paint for ScrollView {
    fn paint(&self, target: &mut Canvas, area: PaintArea, ctx: &DrawContext<'_>) {
        let origin = area.local.origin();
        draw_rect(target, self.track.translate(origin), ctx.config.track_color);
        draw_rect(target, self.thumb.translate(origin), ctx.config.thumb_color);
    }
}

/// Band of `thickness` along the far cross-axis edge of `container`, relative to its
/// top-left corner.
fn track_rect(axis: Axis, container: &Rect, thickness: f32) -> Rect {
    match axis {
        Axis::Vertical => {
            let t = thickness.clamp(0.0, container.w.max(0.0));
            Rect::new(container.w - t, 0.0, t, container.h.max(0.0))
        }
        Axis::Horizontal => {
            let t = thickness.clamp(0.0, container.h.max(0.0));
            Rect::new(0.0, container.h - t, container.w.max(0.0), t)
        }
    }
}

/// Thumb inside `track`: length proportional to the visible share of the content,
/// positioned at `scroll * track_len` and kept within the track.
fn thumb_rect(axis: Axis, track: &Rect, scroll: f32, extents: &Extents, min_len: f32) -> Rect {
    let (start, track_len) = axis.along(track);
    let visible = if extents.total > 0.0 {
        (extents.container / extents.total).min(1.0)
    } else {
        1.0
    };
    let len = (track_len * visible).max(min_len).min(track_len);
    let pos = start + (scroll * track_len).min(track_len - len).max(0.0);
    match axis {
        Axis::Vertical => Rect::new(track.x, pos, track.w, len),
        Axis::Horizontal => Rect::new(pos, track.y, len, track.h),
    }
}
