use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minichart_core::{
    render_surface, ChartConfig, ChartType, Dataset, LogicalSize, RecordingSurface, RenderOptions, SkiaSurface,
};

fn build_config(kind: ChartType, n: usize) -> ChartConfig {
    let labels: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    let a: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin().abs() * 100.0 + 1.0).collect();
    let b: Vec<f64> = (0..n).map(|i| (i as f64 * 0.11).cos().abs() * 80.0).collect();
    ChartConfig::new(kind, labels)
        .with_dataset(Dataset::new("a", a))
        .with_dataset(Dataset::new("b", b))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_skia");
    let opts = RenderOptions::default().with_labels(false);
    for kind in [ChartType::Bar, ChartType::Line, ChartType::Doughnut] {
        for &n in &[12usize, 365usize] {
            let config = build_config(kind.clone(), n);
            group.bench_function(format!("{}_{n}", kind.name()), |b| {
                let mut surface = SkiaSurface::new(LogicalSize::new(800.0, 500.0), 2.0);
                b.iter(|| black_box(render_surface(&mut surface, &config, &opts)));
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("render_recording");
    let config = build_config(ChartType::Bar, 365);
    group.bench_function("bar_365", |b| {
        let mut surface = RecordingSurface::new(LogicalSize::new(800.0, 500.0), 2.0);
        let log = surface.log();
        b.iter(|| {
            black_box(render_surface(&mut surface, &config, &opts));
            log.clear();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
