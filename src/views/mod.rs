//! The view tree and the recursive composition pass.
//!
//! A [`View`] is a node with a rectangle (relative to its parent), an offset that is
//! recomputed every frame, an owned list of children and a [`ViewKind`] that decides
//! how the node paints itself. Parents are always painted before their children and
//! children in list order, so later siblings occlude earlier ones.
//!
//! # Example
//!
//! ```
//! use softview::rendering::{Canvas, Color, Rect};
//! use softview::views::{draw_view, DrawContext, View};
//! use softview::{platform::FrameInput, RenderConfig};
//!
//! let mut root = View::container(Rect::new(0.0, 0.0, 64.0, 64.0))
//!     .with_child(View::rect(Rect::new(8.0, 8.0, 16.0, 16.0), Color::RED));
//!
//! let config = RenderConfig::default();
//! let input = FrameInput::new(64, 64);
//! let mut frame = Canvas::new(64, 64);
//! draw_view(&mut root, &mut frame, &DrawContext::new(&input, &config));
//! assert_eq!(frame.get_pixel(10, 10), Color::RED);
//! ```

pub mod scroll;
pub mod widgets;

use std::sync::Arc;

use log::debug;

pub use scroll::{Axis, Extents, ScrollView};
pub use widgets::{button, panel, ButtonStyle, PanelStyle};

use crate::platform::FrameInput;
use crate::rendering::image::draw_image;
use crate::rendering::raster::{draw_rect, draw_rounded_rect_with, RoundedStyle};
use crate::rendering::text::{draw_text_supersampled, measure_text};
use crate::rendering::{Canvas, Color, Font, Point, Rect};
use crate::{Compositing, RenderConfig};

/// Per-frame state shared by every node during a draw pass.
#[derive(Debug, Clone, Copy)]
pub struct DrawContext<'a> {
    pub input: &'a FrameInput,
    pub config: &'a RenderConfig,
}

impl<'a> DrawContext<'a> {
    pub fn new(input: &'a FrameInput, config: &'a RenderConfig) -> Self {
        Self { input, config }
    }
}

/// Where a node is being painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintArea {
    /// The node's rectangle in the coordinates of the canvas being painted.
    pub local: Rect,
    /// The node's rectangle in framebuffer coordinates, used for pointer hit tests.
    pub absolute: Rect,
}

/// Paints one node (not its children) into `target`.
pub trait Paint {
    fn paint(&self, target: &mut Canvas, area: PaintArea, ctx: &DrawContext<'_>);
}

/// A solid rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectView {
    pub color: Color,
}

impl Paint for RectView {
    fn paint(&self, target: &mut Canvas, area: PaintArea, _ctx: &DrawContext<'_>) {
        draw_rect(target, area.local, self.color);
    }
}

/// A rounded panel that switches to `active` while the pointer hovers it.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub background: Color,
    pub active: Color,
    pub radius: f32,
}

impl Paint for PanelView {
    fn paint(&self, target: &mut Canvas, area: PaintArea, ctx: &DrawContext<'_>) {
        let fill = if area.absolute.contains(ctx.input.pointer) {
            self.active
        } else {
            self.background
        };
        let style = RoundedStyle {
            tolerance: ctx.config.border_tolerance,
            ..RoundedStyle::new(fill, self.radius)
        };
        draw_rounded_rect_with(target, area.local, style);
    }
}

/// A run of single-byte text.
#[derive(Debug, Clone)]
pub struct TextView {
    pub font: Arc<Font>,
    pub text: String,
    pub size: f32,
    pub color: Color,
}

impl Paint for TextView {
    fn paint(&self, target: &mut Canvas, area: PaintArea, ctx: &DrawContext<'_>) {
        let result = draw_text_supersampled(
            target,
            &self.font,
            &self.text,
            self.size,
            area.local.origin(),
            self.color,
            ctx.config.glyph_supersample,
        );
        if let Err(err) = result {
            debug!("text view not drawn: {}", err);
        }
    }
}

/// What a node paints.
#[derive(Debug, Clone)]
pub enum ViewKind {
    /// Paints nothing; only groups children.
    Container,
    Rect(RectView),
    Panel(PanelView),
    Text(TextView),
    Scroll(ScrollView),
}

impl Paint for ViewKind {
    fn paint(&self, target: &mut Canvas, area: PaintArea, ctx: &DrawContext<'_>) {
        match self {
            ViewKind::Container => {}
            ViewKind::Rect(v) => v.paint(target, area, ctx),
            ViewKind::Panel(v) => v.paint(target, area, ctx),
            ViewKind::Text(v) => v.paint(target, area, ctx),
            ViewKind::Scroll(v) => v.paint(target, area, ctx),
        }
    }
}

/// A node in the view tree. Children are owned and dropped with their parent.
#[derive(Debug, Clone)]
pub struct View {
    /// Position relative to the parent's top-left corner, and size.
    pub rect: Rect,
    offset: Point,
    children: Vec<View>,
    kind: ViewKind,
}

impl View {
    pub fn new(rect: Rect, kind: ViewKind) -> Self {
        Self {
            rect,
            offset: Point::ZERO,
            children: Vec::new(),
            kind,
        }
    }

    pub fn container(rect: Rect) -> Self {
        Self::new(rect, ViewKind::Container)
    }

    pub fn rect(rect: Rect, color: Color) -> Self {
        Self::new(rect, ViewKind::Rect(RectView { color }))
    }

    pub fn panel(rect: Rect, background: Color, active: Color, radius: f32) -> Self {
        Self::new(
            rect,
            ViewKind::Panel(PanelView {
                background,
                active,
                radius,
            }),
        )
    }

    /// A text view at `position`; its size is measured once, here.
    pub fn text(position: Point, font: Arc<Font>, text: impl Into<String>, size: f32, color: Color) -> Self {
        let text = text.into();
        let measured = measure_text(&font, &text, size);
        let rect = Rect::new(position.x, position.y, measured.width, measured.height);
        Self::new(
            rect,
            ViewKind::Text(TextView {
                font,
                text,
                size,
                color,
            }),
        )
    }

    pub fn scroll(rect: Rect, axis: Axis) -> Self {
        Self::new(rect, ViewKind::Scroll(ScrollView::new(axis)))
    }

    /// Appends `child`; it is painted after (on top of) existing children.
    pub fn add_child(&mut self, child: View) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn with_child(mut self, child: View) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = View>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn children(&self) -> &[View] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [View] {
        &mut self.children
    }

    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ViewKind {
        &mut self.kind
    }

    /// Accumulated parent position, as of the last draw.
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// `rect` moved by the accumulated parent position.
    pub fn absolute_rect(&self) -> Rect {
        self.rect.translate(self.offset)
    }

    /// Number of nodes in this subtree, this one included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(View::subtree_len).sum::<usize>()
    }

    /// Paints this node alone, after updating scroll state from the frame input.
    fn paint_self(&mut self, target: &mut Canvas, area: PaintArea, ctx: &DrawContext<'_>) {
        if let ViewKind::Scroll(scroll) = &mut self.kind {
            scroll.update(area.absolute, &mut self.children, ctx);
        }
        self.kind.paint(target, area, ctx);
    }
}

/// Draws `view` and its subtree into `target` (whose top-left is the framebuffer
/// origin) and returns the number of nodes drawn.
///
/// The view's own `offset` is used as-is; every child's offset is set to its parent's
/// absolute top-left before the child is drawn.
pub fn draw_view(view: &mut View, target: &mut Canvas, ctx: &DrawContext<'_>) -> usize {
    draw_into(view, target, Point::ZERO, ctx)
}

fn draw_into(view: &mut View, target: &mut Canvas, origin: Point, ctx: &DrawContext<'_>) -> usize {
    let absolute = view.absolute_rect();
    let local = absolute.translate(Point::ZERO - origin);
    let mut drawn = 1;

    match ctx.config.compositing {
        Compositing::Direct => {
            view.paint_self(target, PaintArea { local, absolute }, ctx);
            for child in &mut view.children {
                child.offset = absolute.origin();
                drawn += draw_into(child, target, origin, ctx);
            }
        }
        Compositing::Offscreen => {
            // The layer is aligned to whole framebuffer pixels so that it covers the
            // same pixels a direct paint would.
            let layer_origin = Point::new(absolute.x.floor(), absolute.y.floor());
            let width = (absolute.right().ceil() - layer_origin.x).max(0.0) as u32;
            let height = (absolute.bottom().ceil() - layer_origin.y).max(0.0) as u32;
            // Dropped at the end of this arm, so every node's layer is freed before
            // the frame returns.
            let mut layer = Canvas::new(width, height);
            let area = PaintArea {
                local: absolute.translate(Point::ZERO - layer_origin),
                absolute,
            };
            view.paint_self(&mut layer, area, ctx);
            for child in &mut view.children {
                child.offset = absolute.origin();
                drawn += draw_into(child, &mut layer, layer_origin, ctx);
            }
            let at = layer_origin - origin;
            let dest = Rect::new(at.x, at.y, width as f32, height as f32);
            draw_image(target, &layer, dest, None);
        }
    }
    drawn
}
