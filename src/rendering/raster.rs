//! Shape rasterization: rectangles, rounded rectangles and point-sampled Bezier strokes.

use crate::rendering::canvas::Canvas;
use crate::rendering::color::Color;
use crate::rendering::geometry::{BezierCurve, Rect};

/// Squared-distance tolerance within which a pixel counts as lying on a rounded corner's arc.
pub const BORDER_TOLERANCE: f32 = 10.0;

/// Parameter step used by [`draw_curve`].
pub const CURVE_STEP: f32 = 1e-3;

/// Where a pixel falls relative to a rounded rectangle's outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderCheck {
    Outside,
    OnBorder,
    Inside,
}

/// Integer pixels in `[rect.x, rect.x + rect.w) x [rect.y, rect.y + rect.h)`, clipped to
/// the canvas, as `(x0, y0, x1, y1)` with exclusive ends.
fn pixel_span(rect: Rect, canvas: &Canvas) -> Option<(i32, i32, i32, i32)> {
    if rect.is_empty() || canvas.is_empty() {
        return None;
    }
    let x0 = (rect.x.ceil() as i32).max(0);
    let y0 = (rect.y.ceil() as i32).max(0);
    let x1 = (rect.right().ceil() as i32).min(canvas.width() as i32);
    let y1 = (rect.bottom().ceil() as i32).min(canvas.height() as i32);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

/// Fills `[rect.x, rect.x + rect.w) x [rect.y, rect.y + rect.h)` with `color`, compositing
/// each pixel with [`Canvas::put_pixel`].
pub fn draw_rect(canvas: &mut Canvas, rect: Rect, color: Color) {
    if color.is_transparent() {
        return;
    }
    let Some((x0, y0, x1, y1)) = pixel_span(rect, canvas) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Classifies pixel `(x, y)` against the rounded rectangle `rect` with corner `radius`.
///
/// Each corner circle and both straight edge bands are tested independently and the
/// results are OR-combined; `OnBorder` wins over `Inside`. A radius above
/// `min(w, h) / 2` makes the corner regions overlap and gives a degenerate shape.
pub fn classify_rounded(rect: Rect, x: f32, y: f32, radius: f32, tolerance: f32) -> BorderCheck {
    let r = radius.max(0.0);
    let r_sq = r * r;

    let left = rect.x + r;
    let right = rect.x + rect.w - r;
    let top = rect.y + r;
    let bottom = rect.y + rect.h - r;

    let mut inside = false;
    let mut on_border = false;

    let corners = [
        (left, top, x <= left && y <= top),
        (right, top, x >= right && y <= top),
        (left, bottom, x <= left && y >= bottom),
        (right, bottom, x >= right && y >= bottom),
    ];
    for (cx, cy, in_quadrant) in corners {
        if !in_quadrant {
            continue;
        }
        let d = (x - cx) * (x - cx) + (y - cy) * (y - cy);
        inside |= d < r_sq;
        on_border |= (d - r_sq).abs() <= tolerance;
    }

    inside |= (x > left && x < right) || (y > top && y < bottom);

    on_border |= (x == rect.x || x == rect.x + rect.w) && y >= top && y <= bottom;
    on_border |= (y == rect.y || y == rect.y + rect.h) && x >= left && x <= right;

    if on_border {
        BorderCheck::OnBorder
    } else if inside {
        BorderCheck::Inside
    } else {
        BorderCheck::Outside
    }
}

/// Fill/border parameters for [`draw_rounded_rect_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedStyle {
    pub fill: Color,
    /// Color for `OnBorder` pixels; `None` paints them with `fill`.
    pub border: Option<Color>,
    pub radius: f32,
    pub tolerance: f32,
}

impl RoundedStyle {
    pub fn new(fill: Color, radius: f32) -> Self {
        Self {
            fill,
            border: None,
            radius,
            tolerance: BORDER_TOLERANCE,
        }
    }
}

/// Fills a rounded rectangle, painting every `Inside` or `OnBorder` pixel of the same
/// pixel range [`draw_rect`] covers.
pub fn draw_rounded_rect(canvas: &mut Canvas, rect: Rect, color: Color, radius: f32) {
    draw_rounded_rect_with(canvas, rect, RoundedStyle::new(color, radius));
}

/// Like [`draw_rounded_rect`], with the outline painted in `border_color`.
pub fn draw_rounded_rect_bordered(
    canvas: &mut Canvas,
    rect: Rect,
    fill: Color,
    radius: f32,
    border_color: Color,
) {
    let style = RoundedStyle {
        border: Some(border_color),
        ..RoundedStyle::new(fill, radius)
    };
    draw_rounded_rect_with(canvas, rect, style);
}

pub fn draw_rounded_rect_with(canvas: &mut Canvas, rect: Rect, style: RoundedStyle) {
    let Some((x0, y0, x1, y1)) = pixel_span(rect, canvas) else {
        return;
    };
    // With a border, the first and last pixel of each axis stand for the outer edge,
    // so the right and bottom sides get the same outline as the left and top.
    let bordered = style.border.is_some();
    let edge = |p: i32, lo: f32, len: f32| -> f32 {
        if bordered && p == lo.ceil() as i32 {
            lo
        } else if bordered && p == (lo + len).ceil() as i32 - 1 {
            lo + len
        } else {
            p as f32
        }
    };
    for y in y0..y1 {
        let sy = edge(y, rect.y, rect.h);
        for x in x0..x1 {
            let sx = edge(x, rect.x, rect.w);
            let color = match classify_rounded(rect, sx, sy, style.radius, style.tolerance) {
                BorderCheck::Outside => continue,
                BorderCheck::OnBorder => style.border.unwrap_or(style.fill),
                BorderCheck::Inside => style.fill,
            };
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Plots a cubic Bezier curve one pixel per parameter step of [`CURVE_STEP`].
pub fn draw_curve(canvas: &mut Canvas, curve: &BezierCurve, color: Color) {
    draw_curve_with_step(canvas, curve, color, CURVE_STEP);
}

/// Plots `curve` at every multiple of `step` in `[0, 1]`, endpoint included.
///
/// Consecutive samples must stay within a pixel of each other for the stroke to look
/// continuous, so `step` has to shrink as the curve gets longer.
pub fn draw_curve_with_step(canvas: &mut Canvas, curve: &BezierCurve, color: Color, step: f32) {
    if !(step > 0.0) || color.is_transparent() {
        return;
    }
    let steps = (1.0 / step).ceil() as u32;
    let mut last = None;
    for i in 0..=steps {
        let t = (i as f32 * step).min(1.0);
        let p = curve.point_at(t);
        let px = (p.x.floor() as i32, p.y.floor() as i32);
        // Translucent strokes would darken wherever samples land on the same pixel twice.
        if last == Some(px) {
            continue;
        }
        last = Some(px);
        canvas.put_pixel(px.0, px.1, color);
    }
}
