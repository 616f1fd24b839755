// File: crates/minichart-core/src/recording.rs
// Summary: Display-list backend that records every draw primitive instead of rasterizing.
// Notes:
// - The log is a shared handle so it stays observable while a chart owns the surface.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use skia_safe as skia;

use crate::error::ChartResult;
use crate::geometry::{Point, RectF, Wedge};
use crate::surface::{DrawContext, Surface, TextStyle};
use crate::types::{LogicalSize, PixelSize};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    SetScale(f32),
    ClearRect(RectF),
    FillRect { rect: RectF, color: skia::Color },
    FillWedge { wedge: Wedge, color: skia::Color },
    EraseDisk { center: Point, radius: f32 },
    StrokePolyline { points: Vec<Point>, color: skia::Color, width: f32 },
    FillText { text: String, anchor: Point, style: TextStyle },
}

impl DrawOp {
    /// True for ops that put chart geometry on the surface (not clears, transforms or text).
    pub fn is_geometry(&self) -> bool {
        matches!(self, Self::FillRect { .. } | Self::FillWedge { .. } | Self::EraseDisk { .. } | Self::StrokePolyline { .. })
    }
}

/// Shared, cloneable view of recorded ops.
#[derive(Clone, Debug, Default)]
pub struct DrawLog {
    ops: Rc<RefCell<Vec<DrawOp>>>,
    backing_resizes: Rc<Cell<usize>>,
}

impl DrawLog {
    pub fn ops(&self) -> Ref<'_, Vec<DrawOp>> {
        self.ops.borrow()
    }

    pub fn len(&self) -> usize {
        self.ops.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<DrawOp> {
        std::mem::take(&mut *self.ops.borrow_mut())
    }

    /// How many times the backing buffer was reallocated.
    pub fn backing_resizes(&self) -> usize {
        self.backing_resizes.get()
    }

    fn push(&self, op: DrawOp) {
        self.ops.borrow_mut().push(op);
    }
}

/// `Surface` that never rasterizes; every primitive lands in its `DrawLog`.
#[derive(Debug)]
pub struct RecordingSurface {
    layout: LogicalSize,
    pixel_ratio: f32,
    backing: PixelSize,
    drawable: bool,
    log: DrawLog,
}

impl RecordingSurface {
    pub fn new(layout: LogicalSize, pixel_ratio: f32) -> Self {
        Self { layout, pixel_ratio, backing: PixelSize::default(), drawable: true, log: DrawLog::default() }
    }

    /// A surface without a usable context (e.g. detached from its host).
    pub fn detached(layout: LogicalSize) -> Self {
        Self { drawable: false, ..Self::new(layout, 1.0) }
    }

    pub fn log(&self) -> DrawLog {
        self.log.clone()
    }
}

impl Surface for RecordingSurface {
    fn layout_size(&self) -> LogicalSize { self.layout }

    fn set_layout_size(&mut self, size: LogicalSize) { self.layout = size; }

    fn pixel_ratio(&self) -> f32 { self.pixel_ratio }

    fn set_pixel_ratio(&mut self, ratio: f32) { self.pixel_ratio = ratio; }

    fn backing_size(&self) -> PixelSize { self.backing }

    fn resize_backing(&mut self, size: PixelSize) -> ChartResult<()> {
        self.backing = size;
        let resizes = &self.log.backing_resizes;
        resizes.set(resizes.get() + 1);
        Ok(())
    }

    fn context(&mut self) -> Option<&mut dyn DrawContext> {
        if self.drawable { Some(self) } else { None }
    }
}

impl DrawContext for RecordingSurface {
    fn set_scale(&mut self, ratio: f32) {
        self.log.push(DrawOp::SetScale(ratio));
    }

    fn clear_rect(&mut self, rect: RectF) {
        self.log.push(DrawOp::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: RectF, color: skia::Color) {
        self.log.push(DrawOp::FillRect { rect, color });
    }

    fn fill_wedge(&mut self, wedge: &Wedge, color: skia::Color) {
        self.log.push(DrawOp::FillWedge { wedge: *wedge, color });
    }

    fn erase_disk(&mut self, center: Point, radius: f32) {
        self.log.push(DrawOp::EraseDisk { center, radius });
    }

    fn stroke_polyline(&mut self, points: &[Point], color: skia::Color, width: f32) {
        self.log.push(DrawOp::StrokePolyline { points: points.to_vec(), color, width });
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        self.log.push(DrawOp::FillText { text: text.to_owned(), anchor, style: *style });
    }
}
