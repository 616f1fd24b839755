// File: crates/minichart-core/src/doughnut.rs
// Summary: Pie and doughnut renderer: proportional wedges, then an optional punched-out center.
// Notes:
// - Angles accumulate in f64 so the last wedge closes the circle.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::color;
use crate::config::{ChartConfig, Dataset};
use crate::geometry::{Point, Wedge};
use crate::placeholder;
use crate::render::{EmptyReason, RenderOptions, RenderOutcome};
use crate::surface::DrawContext;
use crate::types::LogicalSize;

/// Outer radius as a fraction of the smaller surface dimension.
pub const RADIUS_RATIO: f32 = 0.42;

/// Wedges for `values` around `center`, starting at 12 o'clock and running clockwise.
/// Zero values yield no wedge but keep their index.
pub fn wedges(values: &[f64], center: Point, radius: f32) -> Vec<(usize, Wedge)> {
    let total: f64 = values.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    let mut out = Vec::with_capacity(values.len());
    for (i, &v) in values.iter().enumerate() {
        let sweep = v / total * TAU;
        if sweep <= 0.0 {
            continue;
        }
        out.push((i, Wedge { center, radius, start: start as f32, sweep: sweep as f32 }));
        start += sweep;
    }
    out
}

pub fn draw(ctx: &mut dyn DrawContext, size: LogicalSize, config: &ChartConfig, opts: &RenderOptions) -> RenderOutcome {
    let values = config.first_dataset().map(Dataset::magnitudes).unwrap_or_default();
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let radius = size.width.min(size.height) * RADIUS_RATIO;

    let slices = wedges(&values, center, radius);
    if slices.is_empty() {
        return placeholder::draw(ctx, size, EmptyReason::NoData, opts);
    }

    let fills = config.first_dataset().and_then(|ds| ds.background_color.as_ref());
    for (i, wedge) in &slices {
        let explicit = fills.and_then(|colors| colors.at(*i));
        ctx.fill_wedge(wedge, color::resolve(explicit, *i, values.len()));
    }

    let cutout = config.options.cutout_fraction(&config.chart_type);
    if cutout > 0.0 {
        ctx.erase_disk(center, radius * cutout);
    }
    RenderOutcome::Drawn
}
