// File: crates/minichart-core/src/surface.rs
// Summary: Drawing-surface contracts and the density-aware sizer run before every render.
// Notes:
// - A `Surface` is the host's raster target: a logical (layout) size, a pixel ratio and a
//   backing buffer. A `DrawContext` is the primitive command set renderers draw with.
// - All renderer coordinates are logical units; `fit_surface` installs the scale.

use skia_safe as skia;
use tracing::{trace, warn};

use crate::error::ChartResult;
use crate::geometry::{Point, RectF, Wedge};
use crate::types::{LogicalSize, PixelSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: skia::Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, align: TextAlign::Left, baseline: TextBaseline::Alphabetic }
    }

    pub fn aligned(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }
}

/// Primitive drawing commands, expressed in logical units once `set_scale` ran.
pub trait DrawContext {
    /// Replace the current transform with a uniform logical→physical scale.
    fn set_scale(&mut self, ratio: f32);
    /// Reset a region to fully transparent.
    fn clear_rect(&mut self, rect: RectF);
    fn fill_rect(&mut self, rect: RectF, color: skia::Color);
    fn fill_wedge(&mut self, wedge: &Wedge, color: skia::Color);
    /// Punch a fully transparent disk through everything drawn so far.
    fn erase_disk(&mut self, center: Point, radius: f32);
    /// Stroke one continuous open path; fewer than two points produces no ink.
    fn stroke_polyline(&mut self, points: &[Point], color: skia::Color, width: f32);
    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle);
}

/// Host raster target owned by exactly one chart at a time.
pub trait Surface {
    /// Current layout size; zero while the host has not laid it out.
    fn layout_size(&self) -> LogicalSize;
    fn set_layout_size(&mut self, size: LogicalSize);
    /// Backing pixels per logical unit as reported by the display.
    fn pixel_ratio(&self) -> f32;
    fn set_pixel_ratio(&mut self, ratio: f32);
    fn backing_size(&self) -> PixelSize;
    /// Reallocate the backing buffer; previous contents are discarded.
    fn resize_backing(&mut self, size: PixelSize) -> ChartResult<()>;
    /// Drawing context, or `None` when the target is not drawable.
    fn context(&mut self) -> Option<&mut dyn DrawContext>;
}

/// Ratio actually applied: at least 1, and 1 for nonsense input.
pub fn effective_ratio(ratio: f32) -> f32 {
    if ratio.is_finite() { ratio.max(1.0) } else { 1.0 }
}

/// Size the backing buffer for the surface's layout size and density, then install the
/// logical coordinate transform. Returns the logical size to draw into, or `None` when
/// the surface cannot be drawn on (callers treat that as a silent no-op).
pub fn fit_surface<S: Surface + ?Sized>(surface: &mut S) -> Option<LogicalSize> {
    let ratio = effective_ratio(surface.pixel_ratio());
    let logical = surface.layout_size().or_fallback();
    let target = PixelSize::scaled(logical, ratio);

    if surface.backing_size() != target {
        trace!(width = target.width, height = target.height, ratio, "resizing backing buffer");
        if let Err(err) = surface.resize_backing(target) {
            warn!(error = %err, "surface not drawable; skipping render");
            return None;
        }
    }

    let ctx = surface.context()?;
    ctx.set_scale(ratio);
    Some(logical)
}
