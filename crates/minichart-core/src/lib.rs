// File: crates/minichart-core/src/lib.rs
// Summary: Core library entry point; fallback bar/line/pie/doughnut charts drawn onto a host surface.

pub mod axes;
pub mod bar;
pub mod chart;
pub mod color;
pub mod config;
pub mod doughnut;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod placeholder;
pub mod recording;
pub mod render;
pub mod resize;
pub mod scale;
pub mod skia_surface;
pub mod surface;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{Chart, ChartBuilder};
pub use config::{ChartConfig, ChartData, ChartOptions, ChartType, ColorSpec, Cutout, Dataset};
pub use error::{ChartError, ChartResult};
pub use recording::{DrawLog, DrawOp, RecordingSurface};
pub use render::{render_config, render_surface, EmptyReason, RenderOptions, RenderOutcome};
pub use resize::{ResizeBus, ResizeEvent, Subscription};
pub use skia_surface::SkiaSurface;
pub use surface::{fit_surface, DrawContext, Surface};
pub use telemetry::init_default_tracing;
pub use theme::Theme;
pub use types::{Insets, LogicalSize, PixelSize};
