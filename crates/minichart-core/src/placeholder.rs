// File: crates/minichart-core/src/placeholder.rs
// Summary: Empty-state fallback: the single way "nothing to show" reaches the surface.

use crate::geometry::{Point, RectF};
use crate::render::{EmptyReason, RenderOptions, RenderOutcome};
use crate::surface::{DrawContext, TextAlign, TextBaseline, TextStyle};
use crate::types::LogicalSize;

pub const NO_DATA_LABEL: &str = "No data";
pub const UNKNOWN_TYPE_LABEL: &str = "Chart";

impl EmptyReason {
    pub fn label(self) -> &'static str {
        match self {
            Self::NoData => NO_DATA_LABEL,
            Self::UnknownType => UNKNOWN_TYPE_LABEL,
        }
    }
}

/// Clear the whole logical surface and center a muted label on it.
pub fn draw(ctx: &mut dyn DrawContext, size: LogicalSize, reason: EmptyReason, opts: &RenderOptions) -> RenderOutcome {
    ctx.clear_rect(RectF::from_xywh(0.0, 0.0, size.width, size.height));
    let style = TextStyle::new(opts.theme.placeholder_size, opts.theme.muted_text)
        .aligned(TextAlign::Center, TextBaseline::Middle);
    ctx.fill_text(reason.label(), Point::new(size.width / 2.0, size.height / 2.0), &style);
    RenderOutcome::Empty(reason)
}
