// File: crates/minichart-core/src/line.rs
// Summary: Single-series line renderer; only the first dataset is drawn.

use crate::axes;
use crate::color::parse_css_color;
use crate::config::{ChartConfig, ColorSpec};
use crate::geometry::Point;
use crate::grid::ticks;
use crate::placeholder;
use crate::render::{EmptyReason, RenderOptions, RenderOutcome};
use crate::scale::{PlotArea, ValueRange};
use crate::surface::DrawContext;
use crate::types::{LogicalSize, LINE_WIDTH, TICK_INTERVALS};

pub fn draw(ctx: &mut dyn DrawContext, size: LogicalSize, config: &ChartConfig, opts: &RenderOptions) -> RenderOutcome {
    let labels = config.labels();
    let Some(ds) = config.first_dataset().filter(|ds| !ds.data.is_empty() && !labels.is_empty()) else {
        return placeholder::draw(ctx, size, EmptyReason::NoData, opts);
    };
    let values: Vec<f64> = (0..ds.data.len()).map(|i| ds.value_at(i)).collect();
    let Some(range) = ValueRange::for_values(&values) else {
        return placeholder::draw(ctx, size, EmptyReason::NoData, opts);
    };

    let area = PlotArea::inset(size, &opts.insets);
    let y = area.value_scale(range);
    let x = area.point_scale(values.len());

    axes::draw_frame(ctx, &area, opts);
    axes::draw_value_grid(ctx, &area, &y, &ticks(range, TICK_INTERVALS), opts);

    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(x.to_px(i), y.to_px(v)))
        .collect();
    let stroke = ds
        .border_color
        .as_ref()
        .and_then(ColorSpec::first)
        .and_then(parse_css_color)
        .unwrap_or(opts.theme.line_stroke);
    ctx.stroke_polyline(&points, stroke, LINE_WIDTH);

    axes::draw_category_labels(ctx, &area, labels, values.len(), |i| x.to_px(i), opts);
    RenderOutcome::Drawn
}
