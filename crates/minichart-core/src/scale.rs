// File: crates/minichart-core/src/scale.rs
// Summary: Value ranges, value (Y) and category (X) scales, and the plot-area layout.
// Notes:
// - No chart-type knowledge lives here; bar and line both map through these types.

use crate::geometry::RectF;
use crate::types::{Insets, LogicalSize};

/// Closed numeric range mapped onto the vertical plot extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Range for non-negative magnitudes across every series: `[0, max]`.
    /// `None` when nothing exceeds zero.
    pub fn for_magnitudes<'a, I>(series: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let max = series
            .into_iter()
            .flat_map(|s| s.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0f64, f64::max);
        (max > 0.0).then_some(Self { min: 0.0, max })
    }

    /// Data-driven range; an all-equal series is widened by 1 on each side.
    /// `None` for an empty series.
    pub fn for_values(values: &[f64]) -> Option<Self> {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        if max == min {
            return Some(Self { min: min - 1.0, max: max + 1.0 });
        }
        Some(Self { min, max })
    }

    fn span(&self) -> f64 { self.max - self.min }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub range: ValueRange,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, range: ValueRange) -> Self {
        Self { top_px, bottom_px, range }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.range.span().max(1e-12);
        self.bottom_px - ((v - self.range.min) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Equal-width category bands across the plot width; band `i` is a pure function of `i`.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub width_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(left_px: f32, width_px: f32, count: usize) -> Self {
        Self { left_px, width_px, count }
    }

    pub fn band_width(&self) -> f32 {
        self.width_px / self.count.max(1) as f32
    }

    pub fn band_start(&self, index: usize) -> f32 {
        self.left_px + index as f32 * self.band_width()
    }

    pub fn band_center(&self, index: usize) -> f32 {
        self.band_start(index) + self.band_width() * 0.5
    }
}

/// Evenly spaced points: first at the left edge, last at the right edge, a lone point
/// pinned to the left edge.
#[derive(Clone, Copy, Debug)]
pub struct PointScale {
    pub left_px: f32,
    pub width_px: f32,
    pub count: usize,
}

impl PointScale {
    pub fn new(left_px: f32, width_px: f32, count: usize) -> Self {
        Self { left_px, width_px, count }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        if self.count <= 1 {
            return self.left_px;
        }
        self.left_px + (index as f32 / (self.count - 1) as f32) * self.width_px
    }
}

/// Plot rectangle for axis-based charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub rect: RectF,
}

impl PlotArea {
    /// Inset `size` by `insets`; a surface smaller than its margins yields a zero-size plot.
    pub fn inset(size: LogicalSize, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let width = (size.width - insets.hsum() as f32).max(0.0);
        let height = (size.height - insets.vsum() as f32).max(0.0);
        Self { rect: RectF::from_xywh(left, top, width, height) }
    }

    pub fn left(&self) -> f32 { self.rect.left }
    pub fn top(&self) -> f32 { self.rect.top }
    pub fn right(&self) -> f32 { self.rect.right }
    pub fn bottom(&self) -> f32 { self.rect.bottom }
    pub fn width(&self) -> f32 { self.rect.width() }
    pub fn height(&self) -> f32 { self.rect.height() }

    pub fn value_scale(&self, range: ValueRange) -> ValueScale {
        ValueScale::new(self.top(), self.bottom(), range)
    }

    pub fn band_scale(&self, count: usize) -> BandScale {
        BandScale::new(self.left(), self.width(), count)
    }

    pub fn point_scale(&self, count: usize) -> PointScale {
        PointScale::new(self.left(), self.width(), count)
    }
}
