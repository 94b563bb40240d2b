// File: crates/lapviz-core/src/error.rs
// Summary: Error taxonomy. Only configuration errors abort a render; data problems are logged and skipped.

use crate::chart::ChartKind;

/// Configuration errors reported to the caller. These are the only failures that abort a render call.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("unknown chart kind '{0}' (expected 'line' or 'bar')")]
    UnknownKind(String),
    #[error("chart kind '{requested}' does not match the supplied {supplied} chart input")]
    KindMismatch { requested: ChartKind, supplied: ChartKind },
    #[error("drawing surface is missing or has no drawable area ({width}x{height})")]
    MissingSurface { width: f32, height: f32 },
    #[error("invalid render option: {0}")]
    InvalidOption(String),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Failures raised by a drawing backend.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("failed to allocate a {width}x{height} backing store")]
    Allocation { width: i32, height: i32 },
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("failed to encode surface: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid color '{0}'")]
    Invalid(String),
}

/// Failures while decoding a telemetry payload at the adapter boundary.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("malformed telemetry payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
