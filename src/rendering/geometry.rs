//! Points, sizes, rectangles and cubic Bezier curves.

use std::ops;

/// A position in canvas space. Coordinates may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between `self` and `other`.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Returns the components as an `[x, y]` array.
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width/height pair, used for text measurement and framebuffer sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle. `x`/`y` is the top-left corner; `w`/`h` are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Point-in-rectangle test, inclusive of all four edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    /// Returns this rectangle moved by `offset`.
    pub fn translate(&self, offset: Point) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Returns the components as an `[x, y, w, h]` array.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.w, self.h]
    }
}

/// A cubic Bezier curve: starts at `p1`, ends at `p4`, pulled towards `p2` and `p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCurve {
    p1: Point,
    p2: Point,
    p3: Point,
    p4: Point,
}

impl BezierCurve {
    pub const fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self { p1, p2, p3, p4 }
    }

    pub fn start(&self) -> Point {
        self.p1
    }

    pub fn end(&self) -> Point {
        self.p4
    }

    pub fn control_points(&self) -> [Point; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    /// Evaluates the curve at `t` in `[0, 1]` by de Casteljau subdivision.
    pub fn point_at(&self, t: f32) -> Point {
        let a = self.p1.lerp(self.p2, t);
        let b = self.p2.lerp(self.p3, t);
        let c = self.p3.lerp(self.p4, t);

        let d = a.lerp(b, t);
        let e = b.lerp(c, t);

        d.lerp(e, t)
    }
}
