// File: crates/minichart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for logical-unit drawing math.

use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self { (p.x, p.y) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { left: x, top: y, right: x + width, bottom: y + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Filled circular sector from `center`, angles in radians, clockwise in
/// screen space (y grows downward), 0 at 3 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub center: Point,
    pub radius: f32,
    pub start: f32,
    pub sweep: f32,
}

impl Wedge {
    pub fn end(&self) -> f32 { self.start + self.sweep }

    /// True when the sweep covers the whole circle (drawn as a disk).
    pub fn is_full_turn(&self) -> bool {
        self.sweep >= TAU - 1e-5
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
