// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: the chart redraws through a ResizeBus fed by winit, then is blitted (CPU) with softbuffer.
// Any key cycles bar -> line -> doughnut -> empty state. An optional JSON config path is shown first.

use anyhow::{Context, Result};
use minichart_core::{
    Chart, ChartBuilder, ChartConfig, ChartOptions, ChartType, ColorSpec, Cutout, Dataset, LogicalSize, ResizeBus, ResizeEvent,
    SkiaSurface,
};
use std::num::NonZeroU32;
use tracing::{debug, info};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Window background the transparent chart is composited over.
const BACKGROUND: [u32; 3] = [255, 255, 255];

fn main() -> Result<()> {
    let _ = minichart_core::init_default_tracing();

    let mut configs = demo_configs();
    if let Some(path) = std::env::args().nth(1) {
        let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
        configs.insert(0, ChartConfig::from_json(&text).with_context(|| format!("parsing {path}"))?);
    }

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Minichart - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 480.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut frame_surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    // The window stands in for the host's layout observer.
    let bus = ResizeBus::new();
    let scale = window.scale_factor();
    let logical: winit::dpi::LogicalSize<f32> = window.inner_size().to_logical(scale);
    let surface = SkiaSurface::new(LogicalSize::new(logical.width, logical.height), scale as f32);
    let mut idx = 0usize;
    let mut chart = ChartBuilder::new().observe(&bus).create(surface, configs[idx].clone());
    info!(drawn = chart.last_outcome().is_drawn(), "initial render");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(physical) => {
                    let scale = window.scale_factor();
                    let logical: winit::dpi::LogicalSize<f32> = physical.to_logical(scale);
                    bus.notify(ResizeEvent::new(LogicalSize::new(logical.width, logical.height)).with_pixel_ratio(scale as f32));
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                    let logical: winit::dpi::LogicalSize<f32> = new_inner_size.to_logical(scale_factor);
                    bus.notify(
                        ResizeEvent::new(LogicalSize::new(logical.width, logical.height)).with_pixel_ratio(scale_factor as f32),
                    );
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    idx = (idx + 1) % configs.len();
                    let outcome = chart.update(Some(configs[idx].clone()));
                    debug!(chart_type = configs[idx].chart_type.name(), ?outcome, "switched chart");
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(err) = blit(&mut chart, &mut frame_surface) {
                    eprintln!("present error: {err:#}");
                }
            }
            _ => {}
        }
    })
}

/// Copy the chart's backing pixels into the window buffer, compositing over `BACKGROUND`.
fn blit(chart: &mut Chart<SkiaSurface>, frame_surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h) = chart.surface_mut().read_rgba8()?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    frame_surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let mut frame = frame_surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let a = px[3] as u32;
        let over = |c: u8, bg: u32| (c as u32 * a + bg * (255 - a)) / 255;
        let (r, g, b) = (over(px[0], BACKGROUND[0]), over(px[1], BACKGROUND[1]), over(px[2], BACKGROUND[2]));
        // softbuffer expects 0RGB
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

fn demo_configs() -> Vec<ChartConfig> {
    let quarters = ["Q1", "Q2", "Q3", "Q4"];
    vec![
        ChartConfig::new(ChartType::Bar, quarters)
            .with_dataset(Dataset::new("Inflow", vec![12_400.0, 13_900.0, 11_200.0, 15_800.0]))
            .with_dataset(Dataset::new("Outflow", vec![9_800.0, 12_100.0, 12_900.0, 10_300.0])),
        ChartConfig::new(ChartType::Line, quarters).with_dataset(
            Dataset::new("Balance", vec![2_600.0, 4_400.0, 2_700.0, 8_200.0])
                .with_border(ColorSpec::single("rgba(13,110,253,.85)")),
        ),
        ChartConfig::new(ChartType::Doughnut, ["Rent", "Food", "Transport", "Other"])
            .with_dataset(Dataset::new("Spend", vec![45.0, 25.0, 10.0, 20.0]))
            .with_options(ChartOptions::default().with_cutout(Cutout::Percent(60.0))),
        ChartConfig::new(ChartType::Pie, ["None"]).with_dataset(Dataset::new("Spend", vec![0.0])),
    ]
}
