//! The demo scene shown by the `softview` binary and used by the golden test and
//! benchmarks: a header, a scrollable list and a hover card over a checkerboard.

use std::sync::Arc;

use crate::app::{App, BuildContext};
use crate::rendering::raster::draw_curve_with_step;
use crate::rendering::{BezierCurve, Canvas, Color, Font, Point, Rect};
use crate::views::{Axis, View};
use crate::RenderConfig;

pub const TITLE: &str = "SOFTVIEW DEMO";
pub const ROWS: usize = 12;
pub const ROW_HEIGHT: f32 = 20.0;

const PAD: f32 = 8.0;
const HEADER_HEIGHT: f32 = 24.0;
const TEXT_SIZE: f32 = 7.0;

const HEADER: Color = Color::from_argb(0xFF2D_3250);
const HEADER_HOVER: Color = Color::from_argb(0xFF42_4769);
const ROW_EVEN: Color = Color::from_argb(0xFF31_3338);
const ROW_ODD: Color = Color::from_argb(0xFF3A_3D44);
const CARD: Color = Color::from_argb(0xC0F6_B17A);
const CARD_HOVER: Color = Color::from_argb(0xFFF6_B17A);
const INK: Color = Color::from_argb(0xFFF0_F0F0);
const CURVE: Color = Color::from_argb(0xFF7F_C8A9);

/// Builds the demo tree for a `ctx.width x ctx.height` frame.
pub fn build(ctx: &BuildContext<'_>) -> View {
    let w = ctx.width as f32;
    let h = ctx.height as f32;
    let font = ctx.font;

    let header = View::panel(
        Rect::new(PAD, PAD, (w - 2.0 * PAD).max(0.0), HEADER_HEIGHT),
        HEADER,
        HEADER_HOVER,
        6.0,
    )
    .with_child(View::text(Point::new(PAD, 8.0), font.clone(), TITLE, TEXT_SIZE, INK));

    let body_y = HEADER_HEIGHT + 2.0 * PAD;
    let body_h = (h - body_y - PAD).max(0.0);
    let column_w = ((w - 3.0 * PAD) / 2.0).max(0.0);
    let row_w = (column_w - ctx.config.scrollbar_thickness).max(0.0);

    let rows = (0..ROWS).map(|i| {
        let fill = if i % 2 == 0 { ROW_EVEN } else { ROW_ODD };
        View::rect(Rect::new(0.0, i as f32 * ROW_HEIGHT, row_w, ROW_HEIGHT), fill).with_child(View::text(
            Point::new(6.0, 7.0),
            font.clone(),
            format!("ITEM {:02}", i + 1),
            TEXT_SIZE,
            INK,
        ))
    });
    let list = View::scroll(Rect::new(PAD, body_y, column_w, body_h), Axis::Vertical).with_children(rows);

    let card = View::panel(Rect::new(2.0 * PAD + column_w, body_y, column_w, body_h), CARD, CARD_HOVER, 10.0)
        .with_child(View::text(Point::new(10.0, 10.0), font.clone(), "hover me", TEXT_SIZE, Color::BLACK));

    View::container(Rect::new(0.0, 0.0, w, h))
        .with_child(header)
        .with_child(list)
        .with_child(card)
}

/// The demo application: [`build`] over a dark checkerboard.
pub fn app(config: RenderConfig) -> App {
    let background = Canvas::checkerboard(
        32,
        16,
        2,
        Color::from_argb(0xFF20_2020),
        Color::from_argb(0xFF26_2626),
    );
    App::new(config, Arc::new(Font::builtin()), build).with_background(background)
}

/// Strokes a decorative curve across the bottom of the frame, above the views.
pub fn draw_overlay(frame: &mut Canvas, config: &RenderConfig) {
    let w = frame.width() as f32;
    let h = frame.height() as f32;
    let curve = BezierCurve::new(
        Point::new(0.0, h - 2.0),
        Point::new(w * 0.33, h - 24.0),
        Point::new(w * 0.66, h + 20.0),
        Point::new(w - 1.0, h - 12.0),
    );
    draw_curve_with_step(frame, &curve, CURVE, config.curve_step);
}
