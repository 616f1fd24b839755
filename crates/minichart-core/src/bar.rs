// File: crates/minichart-core/src/bar.rs
// Summary: Grouped vertical bar renderer: one band per category, one bar per series in each band.

use crate::axes;
use crate::color;
use crate::config::{ChartConfig, ColorSpec};
use crate::geometry::RectF;
use crate::grid::ticks;
use crate::placeholder;
use crate::render::{EmptyReason, RenderOptions, RenderOutcome};
use crate::scale::{BandScale, PlotArea, ValueRange};
use crate::surface::DrawContext;
use crate::types::{LogicalSize, TICK_INTERVALS};

/// Upper bound of the gap between groups.
const MAX_GROUP_GAP: f32 = 10.0;
/// Group gap as a fraction of the band width, before the cap.
const GROUP_GAP_RATIO: f32 = 0.18;
/// Horizontal space between adjacent bars of one group.
const BAR_SPACING: f32 = 2.0;
const MIN_BAR_WIDTH: f32 = 1.0;

/// Horizontal placement of bars inside category bands.
#[derive(Clone, Copy, Debug)]
pub struct BarSlots {
    bands: BandScale,
    series: usize,
}

impl BarSlots {
    pub fn new(bands: BandScale, series: usize) -> Self {
        Self { bands, series: series.max(1) }
    }

    pub fn gap(&self) -> f32 {
        MAX_GROUP_GAP.min(self.bands.band_width() * GROUP_GAP_RATIO)
    }

    /// Slot width per series before spacing.
    pub fn slot_width(&self) -> f32 {
        (self.bands.band_width() - self.gap()) / self.series as f32
    }

    /// Left edge and drawn width of bar (`group`, `series`).
    pub fn bar(&self, group: usize, series: usize) -> (f32, f32) {
        let slot = self.slot_width();
        let x = self.bands.band_start(group) + series as f32 * slot + self.gap() / 2.0;
        (x, (slot - BAR_SPACING).max(MIN_BAR_WIDTH))
    }
}

pub fn draw(ctx: &mut dyn DrawContext, size: LogicalSize, config: &ChartConfig, opts: &RenderOptions) -> RenderOutcome {
    let labels = config.labels();
    let datasets = config.datasets();
    if labels.is_empty() {
        return placeholder::draw(ctx, size, EmptyReason::NoData, opts);
    }

    // Only categories with a label are plotted; negatives are drawn as empty bars.
    let columns: Vec<Vec<f64>> = datasets
        .iter()
        .map(|ds| (0..labels.len()).map(|i| ds.value_at(i).max(0.0)).collect())
        .collect();
    let Some(range) = ValueRange::for_magnitudes(columns.iter().map(Vec::as_slice)) else {
        return placeholder::draw(ctx, size, EmptyReason::NoData, opts);
    };

    let area = PlotArea::inset(size, &opts.insets);
    let values = area.value_scale(range);
    let bands = area.band_scale(labels.len());
    let slots = BarSlots::new(bands, datasets.len());

    axes::draw_frame(ctx, &area, opts);
    axes::draw_value_grid(ctx, &area, &values, &ticks(range, TICK_INTERVALS), opts);

    for (s, (ds, column)) in datasets.iter().zip(&columns).enumerate() {
        let fill = color::resolve(ds.background_color.as_ref().and_then(ColorSpec::first), s, datasets.len());
        for (i, &v) in column.iter().enumerate() {
            let (x, w) = slots.bar(i, s);
            let top = values.to_px(v);
            ctx.fill_rect(RectF::from_ltrb(x, top, x + w, area.bottom()), fill);
        }
    }

    axes::draw_category_labels(ctx, &area, labels, labels.len(), |i| bands.band_center(i), opts);
    RenderOutcome::Drawn
}
