// File: crates/minichart-core/tests/properties.rs
// Purpose: Property checks over arbitrary data: wedge closure, determinism, empty-state routing, color purity.

use std::f32::consts::TAU;

use minichart_core::color::{fallback_color, resolve};
use minichart_core::doughnut::wedges;
use minichart_core::geometry::Point;
use minichart_core::{
    Chart, ChartConfig, ChartType, Dataset, DrawOp, EmptyReason, LogicalSize, RecordingSurface, RenderOutcome,
};
use proptest::prelude::*;

fn chart_type() -> impl Strategy<Value = ChartType> {
    prop_oneof![
        Just(ChartType::Bar),
        Just(ChartType::Line),
        Just(ChartType::Pie),
        Just(ChartType::Doughnut),
    ]
}

fn record(config: &ChartConfig, size: LogicalSize) -> (RenderOutcome, Vec<DrawOp>) {
    let surface = RecordingSurface::new(size, 1.5);
    let log = surface.log();
    let chart = Chart::create(surface, config.clone());
    (chart.last_outcome(), log.take())
}

proptest! {
    #[test]
    fn wedge_sweeps_close_the_circle(values in prop::collection::vec(0.0f64..1_000.0, 1..24)) {
        prop_assume!(values.iter().sum::<f64>() > 0.0);
        let w = wedges(&values, Point::new(50.0, 50.0), 40.0);
        let total: f32 = w.iter().map(|(_, wedge)| wedge.sweep).sum();
        prop_assert!((total - TAU).abs() < 1e-3, "sweeps sum to {total}");
        for pair in w.windows(2) {
            prop_assert!((pair[1].1.start - pair[0].1.end()).abs() < 1e-4);
        }
    }

    #[test]
    fn rendering_is_deterministic(
        kind in chart_type(),
        data in prop::collection::vec(-50.0f64..500.0, 0..16),
        width in 40.0f32..800.0,
        height in 40.0f32..600.0,
    ) {
        let labels: Vec<String> = (0..data.len()).map(|i| format!("c{i}")).collect();
        let config = ChartConfig::new(kind, labels).with_dataset(Dataset::new("s", data));
        let size = LogicalSize::new(width, height);
        prop_assert_eq!(record(&config, size), record(&config, size));
    }

    #[test]
    fn non_positive_data_never_draws_wedges_or_bars(
        kind in prop_oneof![Just(ChartType::Bar), Just(ChartType::Pie), Just(ChartType::Doughnut)],
        data in prop::collection::vec(-100.0f64..=0.0, 0..10),
    ) {
        let labels: Vec<String> = (0..data.len()).map(|i| format!("c{i}")).collect();
        let config = ChartConfig::new(kind, labels).with_dataset(Dataset::new("s", data));
        let (outcome, ops) = record(&config, LogicalSize::new(300.0, 150.0));
        prop_assert_eq!(outcome, RenderOutcome::Empty(EmptyReason::NoData));
        prop_assert!(!ops.iter().any(DrawOp::is_geometry));
    }

    #[test]
    fn colors_depend_only_on_index_count_and_explicit(index in 0usize..64, count in 1usize..64) {
        prop_assert_eq!(fallback_color(index, count), fallback_color(index, count));
        prop_assert_eq!(resolve(None, index, count), fallback_color(index, count));
        prop_assert_eq!(resolve(Some("not-a-color"), index, count), fallback_color(index, count));
        prop_assert_eq!(
            resolve(Some("#0d6efd"), index, count),
            minichart_core::color::parse_css_color("#0d6efd").expect("hex")
        );
    }
}
