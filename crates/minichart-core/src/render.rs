// File: crates/minichart-core/src/render.rs
// Summary: Render options, outcomes, and the dispatch from chart type to renderer.
// Notes:
// - Every render starts from a cleared surface; nothing from a previous frame survives.

use tracing::debug;

use crate::config::{ChartConfig, ChartType};
use crate::geometry::RectF;
use crate::surface::{fit_surface, DrawContext, Surface};
use crate::theme::Theme;
use crate::types::{Insets, LogicalSize};
use crate::{bar, doughnut, line, placeholder};

/// Presentation knobs that are not part of the chart configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub insets: Insets,
    /// Tick and category labels. The empty-state label is drawn regardless.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), insets: Insets::default(), draw_labels: true }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// Nothing to plot: no categories, no points, or every magnitude is zero.
    NoData,
    /// The configuration names a chart type this engine does not draw.
    UnknownType,
}

/// What a render pass put on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The surface had no drawing context; nothing was touched.
    NotDrawable,
    Drawn,
    Empty(EmptyReason),
}

impl RenderOutcome {
    pub fn is_drawn(self) -> bool {
        matches!(self, Self::Drawn)
    }
}

/// Clear `size` and draw `config` with the renderer for its type.
pub fn render_config(ctx: &mut dyn DrawContext, size: LogicalSize, config: &ChartConfig, opts: &RenderOptions) -> RenderOutcome {
    ctx.clear_rect(RectF::from_xywh(0.0, 0.0, size.width, size.height));
    match &config.chart_type {
        ChartType::Doughnut | ChartType::Pie => doughnut::draw(ctx, size, config, opts),
        ChartType::Bar => bar::draw(ctx, size, config, opts),
        ChartType::Line => line::draw(ctx, size, config, opts),
        ChartType::Unknown(_) => placeholder::draw(ctx, size, EmptyReason::UnknownType, opts),
    }
}

/// Fit the surface to its layout and density, then render into it.
pub fn render_surface<S: Surface + ?Sized>(surface: &mut S, config: &ChartConfig, opts: &RenderOptions) -> RenderOutcome {
    let Some(size) = fit_surface(surface) else {
        return RenderOutcome::NotDrawable;
    };
    let Some(ctx) = surface.context() else {
        return RenderOutcome::NotDrawable;
    };
    let outcome = render_config(ctx, size, config, opts);
    debug!(chart_type = config.chart_type.name(), width = size.width, height = size.height, ?outcome, "rendered chart");
    outcome
}
