//! Error types for gf-layout.

use thiserror::Error;

/// Errors from [`TerminalLayoutBuilder::build`](crate::TerminalLayoutBuilder::build).
///
/// Only layout *construction* can fail; once a layout exists, every lookup
/// on it degrades softly (unknown gate ids resolve to the first gate).
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("terminal layout has no gates")]
    NoGates,

    #[error("heatmap grid dimensions must be non-zero (got {cols}×{rows})")]
    ZeroGridDims { cols: u32, rows: u32 },

    #[error("terminal bounds must have positive extent (got {width}×{height})")]
    EmptyTerminal { width: f32, height: f32 },
}

/// Alias for `Result<T, LayoutError>`.
pub type LayoutResult<T> = Result<T, LayoutError>;
