// File: crates/minichart-core/tests/lifecycle.rs
// Purpose: Create/update/destroy behavior and responsive redraws driven by a ResizeBus.

use minichart_core::{
    Chart, ChartBuilder, ChartConfig, ChartOptions, ChartType, Dataset, DrawOp, LogicalSize, PixelSize, RecordingSurface,
    Insets, RenderOptions, RenderOutcome, ResizeBus, ResizeEvent, Surface,
};

fn doughnut() -> ChartConfig {
    ChartConfig::new(ChartType::Doughnut, ["a", "b"]).with_dataset(Dataset::new("s", vec![2.0, 1.0]))
}

fn full_clear(ops: &[DrawOp]) -> Option<minichart_core::geometry::RectF> {
    ops.iter().find_map(|op| match op {
        DrawOp::ClearRect(r) => Some(*r),
        _ => None,
    })
}

#[test]
fn create_draws_immediately() {
    let surface = RecordingSurface::new(LogicalSize::new(320.0, 160.0), 1.0);
    let log = surface.log();
    let chart = Chart::create(surface, doughnut());
    assert_eq!(chart.last_outcome(), RenderOutcome::Drawn);
    assert!(log.ops().iter().any(DrawOp::is_geometry));
    assert_eq!(chart.surface().backing_size(), PixelSize::new(320, 160));
}

#[test]
fn unlaid_out_surface_uses_fallback_size() {
    let surface = RecordingSurface::new(LogicalSize::new(0.0, 0.0), 1.0);
    let log = surface.log();
    let chart = Chart::create(surface, doughnut());
    assert_eq!(chart.surface().backing_size(), PixelSize::new(300, 150));
    assert_eq!(full_clear(&log.ops()), Some(minichart_core::geometry::RectF::from_xywh(0.0, 0.0, 300.0, 150.0)));
}

#[test]
fn detached_surface_is_a_silent_no_op() {
    let surface = RecordingSurface::detached(LogicalSize::new(200.0, 100.0));
    let log = surface.log();
    let mut chart = Chart::create(surface, doughnut());
    assert_eq!(chart.last_outcome(), RenderOutcome::NotDrawable);
    assert_eq!(chart.update(None), RenderOutcome::NotDrawable);
    assert!(log.is_empty());
}

#[test]
fn repeated_updates_are_identical() {
    let surface = RecordingSurface::new(LogicalSize::new(300.0, 200.0), 2.0);
    let log = surface.log();
    let mut chart = Chart::create(surface, doughnut());
    log.clear();
    chart.update(Some(doughnut()));
    let first = log.take();
    chart.update(Some(doughnut()));
    assert_eq!(log.take(), first);
    assert_eq!(log.backing_resizes(), 1, "unchanged size must not reallocate");
}

#[test]
fn resize_redraws_at_new_size_and_density() {
    let bus = ResizeBus::new();
    let surface = RecordingSurface::new(LogicalSize::new(200.0, 100.0), 1.0);
    let log = surface.log();
    let chart = ChartBuilder::new().observe(&bus).create(surface, doughnut());
    log.clear();

    let delivered = bus.notify(ResizeEvent::new(LogicalSize::new(150.5, 80.0)).with_pixel_ratio(2.0));
    assert_eq!(delivered, 1);
    assert_eq!(chart.surface().backing_size(), PixelSize::new(301, 160));

    let ops = log.take();
    assert_eq!(ops.first(), Some(&DrawOp::SetScale(2.0)));
    assert_eq!(full_clear(&ops), Some(minichart_core::geometry::RectF::from_xywh(0.0, 0.0, 150.5, 80.0)));
    assert_eq!(chart.last_outcome(), RenderOutcome::Drawn);
}

#[test]
fn density_below_one_is_treated_as_one() {
    let surface = RecordingSurface::new(LogicalSize::new(100.0, 50.0), 0.5);
    let log = surface.log();
    let chart = Chart::create(surface, doughnut());
    assert_eq!(chart.surface().backing_size(), PixelSize::new(100, 50));
    assert_eq!(log.ops().first(), Some(&DrawOp::SetScale(1.0)));
}

#[test]
fn non_responsive_chart_ignores_resize_events() {
    let bus = ResizeBus::new();
    let surface = RecordingSurface::new(LogicalSize::new(200.0, 100.0), 1.0);
    let log = surface.log();
    let config = doughnut().with_options(ChartOptions::default().with_responsive(false));
    let mut chart = ChartBuilder::new().observe(&bus).create(surface, config);
    assert_eq!(bus.subscriber_count(), 0);
    log.clear();

    assert_eq!(bus.notify(ResizeEvent::new(LogicalSize::new(400.0, 200.0))), 0);
    assert!(log.is_empty());

    // hosts can still push a size by hand
    assert_eq!(chart.resize(ResizeEvent::new(LogicalSize::new(400.0, 200.0))), RenderOutcome::Drawn);
    assert_eq!(chart.surface().backing_size(), PixelSize::new(400, 200));
}

#[test]
fn destroy_clears_unsubscribes_and_returns_surface() {
    let bus = ResizeBus::new();
    let surface = RecordingSurface::new(LogicalSize::new(200.0, 100.0), 1.0);
    let log = surface.log();
    let chart = ChartBuilder::new().observe(&bus).create(surface, doughnut());
    log.clear();

    let surface = chart.destroy().expect("sole owner");
    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(log.take(), vec![DrawOp::ClearRect(minichart_core::geometry::RectF::from_xywh(0.0, 0.0, 200.0, 100.0))]);

    assert_eq!(bus.notify(ResizeEvent::new(LogicalSize::new(640.0, 480.0))), 0);
    assert!(log.is_empty(), "no draws after destroy");
    assert_eq!(surface.layout_size(), LogicalSize::new(200.0, 100.0));
}

#[test]
fn one_bus_drives_several_charts() {
    let bus = ResizeBus::new();
    let a = RecordingSurface::new(LogicalSize::new(100.0, 100.0), 1.0);
    let b = RecordingSurface::new(LogicalSize::new(100.0, 100.0), 1.0);
    let (log_a, log_b) = (a.log(), b.log());
    let chart_a = ChartBuilder::new().observe(&bus).create(a, doughnut());
    let chart_b = ChartBuilder::new().observe(&bus).create(b, doughnut());
    log_a.clear();
    log_b.clear();

    drop(chart_a);
    assert_eq!(bus.notify(ResizeEvent::new(LogicalSize::new(120.0, 90.0))), 1);
    assert!(log_a.is_empty());
    assert!(!log_b.is_empty());
    assert_eq!(chart_b.surface().layout_size(), LogicalSize::new(120.0, 90.0));
}

#[test]
fn update_to_unknown_type_replaces_previous_frame() {
    let surface = RecordingSurface::new(LogicalSize::new(200.0, 100.0), 1.0);
    let log = surface.log();
    let mut chart = Chart::create(surface, doughnut());
    log.clear();
    let outcome = chart.update(Some(ChartConfig::new(ChartType::parse("sparkline"), ["a"])));
    assert!(matches!(outcome, RenderOutcome::Empty(_)));
    let ops = log.take();
    assert!(!ops.iter().any(DrawOp::is_geometry));
    assert_eq!(chart.config().chart_type.name(), "sparkline");
}

#[test]
fn new_render_options_redraw_with_the_new_plot_area() {
    let surface = RecordingSurface::new(LogicalSize::new(200.0, 100.0), 1.0);
    let log = surface.log();
    let config = ChartConfig::new(ChartType::Bar, ["a"]).with_dataset(Dataset::new("s", vec![1.0]));
    let mut chart = Chart::create(surface, config);
    assert_eq!(chart.render_options(), RenderOptions::default());
    log.clear();

    let opts = RenderOptions::default().with_insets(Insets::new(10, 10, 10, 10)).with_labels(false);
    assert!(chart.set_render_options(opts).is_drawn());
    assert_eq!(chart.render_options(), opts);

    let frame = log
        .take()
        .into_iter()
        .find_map(|op| match op {
            DrawOp::StrokePolyline { points, .. } if points.len() == 3 => Some(points),
            _ => None,
        })
        .expect("axis frame");
    assert_eq!((frame[0].x, frame[0].y), (10.0, 10.0));
    assert_eq!((frame[2].x, frame[2].y), (190.0, 90.0));
}
