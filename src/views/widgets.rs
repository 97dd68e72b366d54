//! Immediate-mode widgets drawn straight into a canvas without a view tree.
//!
//! Each call paints the widget for the current frame and reports whether the pointer
//! is pressing it. Rectangles are in framebuffer coordinates.

use crate::platform::FrameInput;
use crate::rendering::raster::{draw_rounded_rect_with, RoundedStyle};
use crate::rendering::{Canvas, Color, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub rect: Rect,
    pub background: Color,
    /// Used while the pointer is over the button with no button held.
    pub hover: Color,
    /// Used while the left button is held over the button.
    pub active: Color,
    pub border: Color,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub rect: Rect,
    pub background: Color,
    pub border: Color,
    pub radius: f32,
}

fn paint(canvas: &mut Canvas, rect: Rect, fill: Color, border: Color, radius: f32) {
    let style = RoundedStyle {
        border: Some(border),
        ..RoundedStyle::new(fill, radius)
    };
    draw_rounded_rect_with(canvas, rect, style);
}

/// Paints a button and returns `true` while it is being pressed.
pub fn button(canvas: &mut Canvas, input: &FrameInput, style: &ButtonStyle) -> bool {
    let over = style.rect.contains(input.pointer);
    let pressed = over && input.left_down;
    let fill = match (over, input.left_down) {
        (true, false) => style.hover,
        (true, true) => style.active,
        _ => style.background,
    };
    paint(canvas, style.rect, fill, style.border, style.radius);
    pressed
}

/// Paints a panel and returns `true` while the left button is held over it.
pub fn panel(canvas: &mut Canvas, input: &FrameInput, style: &PanelStyle) -> bool {
    paint(canvas, style.rect, style.background, style.border, style.radius);
    style.rect.contains(input.pointer) && input.left_down
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> ButtonStyle {
        ButtonStyle {
            rect: Rect::new(10.0, 10.0, 40.0, 20.0),
            background: Color::rgb(40, 40, 40),
            hover: Color::rgb(80, 80, 80),
            active: Color::rgb(120, 120, 120),
            border: Color::WHITE,
            radius: 4.0,
        }
    }

    #[test]
    fn button_colors_follow_pointer_state() {
        let s = style();
        let cases = [
            (FrameInput::new(64, 64), s.background, false),
            (FrameInput::new(64, 64).with_pointer(30.0, 20.0), s.hover, false),
            (FrameInput::new(64, 64).with_pointer(30.0, 20.0).with_left_down(true), s.active, true),
            (FrameInput::new(64, 64).with_pointer(60.0, 60.0).with_left_down(true), s.background, false),
        ];
        for (input, expected, clicked) in cases {
            let mut c = Canvas::new(64, 64);
            assert_eq!(button(&mut c, &input, &s), clicked);
            assert_eq!(c.get_pixel(30, 20), expected);
        }
    }

    #[test]
    fn panel_has_border_and_reports_press() {
        let s = PanelStyle {
            rect: Rect::new(0.0, 0.0, 30.0, 30.0),
            background: Color::BLACK,
            border: Color::RED,
            radius: 0.0,
        };
        let mut c = Canvas::new(32, 32);
        assert!(!panel(&mut c, &FrameInput::new(32, 32).with_pointer(5.0, 5.0), &s));
        assert_eq!(c.get_pixel(0, 10), Color::RED);
        assert_eq!(c.get_pixel(10, 10), Color::BLACK);
        assert!(panel(&mut c, &FrameInput::new(32, 32).with_pointer(5.0, 5.0).with_left_down(true), &s));
    }
}
