// File: crates/minichart-core/src/types.rs
// Summary: Shared types and constants (logical sizes, fallback surface size, plot margins).

/// Logical width used when the surface has not been laid out yet.
pub const FALLBACK_WIDTH: f32 = 300.0;
/// Logical height used when the surface has not been laid out yet.
pub const FALLBACK_HEIGHT: f32 = 150.0;

/// Number of category labels shown under the axis before thinning kicks in.
pub const CATEGORY_LABEL_BUDGET: usize = 6;
/// Intervals between value-axis gridlines (bar and line charts).
pub const TICK_INTERVALS: usize = 4;
/// Stroke width of the line series, in logical units.
pub const LINE_WIDTH: f32 = 2.0;

/// Size in logical (layout) units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogicalSize {
    pub width: f32,
    pub height: f32,
}

impl LogicalSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Replace non-positive or non-finite dimensions with the fallback canvas size.
    pub fn or_fallback(self) -> Self {
        let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            width: pick(self.width, FALLBACK_WIDTH),
            height: pick(self.height, FALLBACK_HEIGHT),
        }
    }
}

/// Size of a backing pixel buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Density-adjusted backing size: `round(logical × ratio)` per axis.
    pub fn scaled(logical: LogicalSize, ratio: f32) -> Self {
        let px = |v: f32| (v * ratio).round().max(1.0) as u32;
        Self { width: px(logical.width), height: px(logical.height) }
    }
}

/// Plot margins around axis-based charts, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Left margin holds value labels, bottom margin holds category labels.
    fn default() -> Self {
        Self::new(44, 8, 12, 40)
    }
}
