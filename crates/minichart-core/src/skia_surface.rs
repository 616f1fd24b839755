// File: crates/minichart-core/src/skia_surface.rs
// Summary: Skia CPU raster backend implementing `Surface` + `DrawContext`.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::geometry::{Point, RectF, Wedge};
use crate::surface::{DrawContext, Surface, TextStyle};
use crate::text::TextShaper;
use crate::types::{LogicalSize, PixelSize};

/// Raster surface whose backing buffer is allocated lazily by the sizer.
pub struct SkiaSurface {
    layout: LogicalSize,
    pixel_ratio: f32,
    raster: Option<skia::Surface>,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(layout: LogicalSize, pixel_ratio: f32) -> Self {
        Self { layout, pixel_ratio, raster: None, shaper: TextShaper::new() }
    }

    /// Read the backing buffer as tightly packed, unpremultiplied RGBA8.
    /// Returns (pixels, width, height).
    pub fn read_rgba8(&mut self) -> ChartResult<(Vec<u8>, u32, u32)> {
        let raster = self.raster.as_mut().ok_or(ChartError::PixelReadback)?;
        let (w, h) = (raster.width(), raster.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = (w as usize) * 4;
        let mut px = vec![0u8; row_bytes * h as usize];
        if !raster.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            return Err(ChartError::PixelReadback);
        }
        Ok((px, w as u32, h as u32))
    }

    fn canvas(&mut self) -> Option<&skia::Canvas> {
        self.raster.as_mut().map(|s| s.canvas())
    }
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn clear_paint() -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_blend_mode(skia::BlendMode::Clear);
    paint
}

fn sk_rect(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

impl Surface for SkiaSurface {
    fn layout_size(&self) -> LogicalSize { self.layout }

    fn set_layout_size(&mut self, size: LogicalSize) { self.layout = size; }

    fn pixel_ratio(&self) -> f32 { self.pixel_ratio }

    fn set_pixel_ratio(&mut self, ratio: f32) { self.pixel_ratio = ratio; }

    fn backing_size(&self) -> PixelSize {
        self.raster
            .as_ref()
            .map(|s| PixelSize::new(s.width() as u32, s.height() as u32))
            .unwrap_or_default()
    }

    fn resize_backing(&mut self, size: PixelSize) -> ChartResult<()> {
        let raster = skia::surfaces::raster_n32_premul((size.width as i32, size.height as i32))
            .ok_or(ChartError::RasterAllocation { width: size.width, height: size.height })?;
        self.raster = Some(raster);
        Ok(())
    }

    fn context(&mut self) -> Option<&mut dyn DrawContext> {
        if self.raster.is_some() { Some(self) } else { None }
    }
}

impl DrawContext for SkiaSurface {
    fn set_scale(&mut self, ratio: f32) {
        if let Some(canvas) = self.canvas() {
            canvas.reset_matrix();
            canvas.scale((ratio, ratio));
        }
    }

    fn clear_rect(&mut self, rect: RectF) {
        if let Some(canvas) = self.canvas() {
            canvas.draw_rect(sk_rect(rect), &clear_paint());
        }
    }

    fn fill_rect(&mut self, rect: RectF, color: skia::Color) {
        if let Some(canvas) = self.canvas() {
            canvas.draw_rect(sk_rect(rect), &fill_paint(color));
        }
    }

    fn fill_wedge(&mut self, wedge: &Wedge, color: skia::Color) {
        let Some(canvas) = self.canvas() else { return };
        let paint = fill_paint(color);
        if wedge.is_full_turn() {
            canvas.draw_circle(wedge.center, wedge.radius, &paint);
            return;
        }
        let c = wedge.center;
        let oval = skia::Rect::from_ltrb(c.x - wedge.radius, c.y - wedge.radius, c.x + wedge.radius, c.y + wedge.radius);
        let mut path = skia::Path::new();
        path.move_to(c);
        path.arc_to(oval, wedge.start.to_degrees(), wedge.sweep.to_degrees(), false);
        path.close();
        canvas.draw_path(&path, &paint);
    }

    fn erase_disk(&mut self, center: Point, radius: f32) {
        if let Some(canvas) = self.canvas() {
            canvas.draw_circle(center, radius, &clear_paint());
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], color: skia::Color, width: f32) {
        let Some(canvas) = self.canvas() else { return };
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(width);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        let Some(raster) = self.raster.as_mut() else { return };
        self.shaper.draw_anchored(raster.canvas(), text, anchor.into(), style);
    }
}

impl From<Point> for skia::Point {
    fn from(p: Point) -> Self { skia::Point::new(p.x, p.y) }
}
