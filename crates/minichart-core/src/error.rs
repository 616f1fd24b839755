// File: crates/minichart-core/src/error.rs
// Summary: Error type for surface backends and configuration parsing.
// The render pass itself never returns errors; see `RenderOutcome`.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to allocate {width}x{height} raster surface")]
    RasterAllocation { width: u32, height: u32 },

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("surface pixels could not be read back")]
    PixelReadback,
}
