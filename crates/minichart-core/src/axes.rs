// File: crates/minichart-core/src/axes.rs
// Summary: Shared axis furniture for bar and line charts: L-shaped frame, value gridlines
// with right-aligned labels, and thinned category labels.

use crate::geometry::Point;
use crate::grid::{format_tick, label_stride};
use crate::render::RenderOptions;
use crate::scale::{PlotArea, ValueScale};
use crate::surface::{DrawContext, TextAlign, TextBaseline, TextStyle};
use crate::types::CATEGORY_LABEL_BUDGET;

/// Gap between the plot edge and axis labels.
const LABEL_GAP: f32 = 6.0;
const RULE_WIDTH: f32 = 1.0;

/// Left and bottom borders of the plot area as one stroke.
pub fn draw_frame(ctx: &mut dyn DrawContext, area: &PlotArea, opts: &RenderOptions) {
    let corner = [
        Point::new(area.left(), area.top()),
        Point::new(area.left(), area.bottom()),
        Point::new(area.right(), area.bottom()),
    ];
    ctx.stroke_polyline(&corner, opts.theme.axis_line, RULE_WIDTH);
}

/// One horizontal gridline per tick, labelled in the left margin.
pub fn draw_value_grid(ctx: &mut dyn DrawContext, area: &PlotArea, scale: &ValueScale, ticks: &[f64], opts: &RenderOptions) {
    let style = TextStyle::new(opts.theme.tick_label_size, opts.theme.muted_text)
        .aligned(TextAlign::Right, TextBaseline::Middle);
    for &tick in ticks {
        let y = scale.to_px(tick);
        if opts.draw_labels {
            ctx.fill_text(&format_tick(tick), Point::new(area.left() - LABEL_GAP, y), &style);
        }
        ctx.stroke_polyline(&[Point::new(area.left(), y), Point::new(area.right(), y)], opts.theme.grid, RULE_WIDTH);
    }
}

/// Category labels under the bottom axis, every k-th only once past the display budget.
/// `x_of` must only be called for indices below `count`.
pub fn draw_category_labels(
    ctx: &mut dyn DrawContext,
    area: &PlotArea,
    labels: &[String],
    count: usize,
    x_of: impl Fn(usize) -> f32,
    opts: &RenderOptions,
) {
    if !opts.draw_labels {
        return;
    }
    let style = TextStyle::new(opts.theme.category_label_size, opts.theme.muted_text)
        .aligned(TextAlign::Center, TextBaseline::Top);
    let shown = count.min(labels.len());
    let y = area.bottom() + LABEL_GAP;
    for i in (0..shown).step_by(label_stride(count, CATEGORY_LABEL_BUDGET)) {
        ctx.fill_text(&labels[i], Point::new(x_of(i), y), &style);
    }
}
