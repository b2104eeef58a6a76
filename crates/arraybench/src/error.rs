//! Error types for the benchmark support library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the aligned allocators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    /// Alignment is zero, not a power of two, or too small for the element.
    #[error("invalid alignment {align}: must be a power of two and at least {min}")]
    InvalidAlignment { align: usize, min: usize },

    /// Requested size does not fit in `isize`.
    #[error("allocation of {len} elements overflows the address space")]
    LayoutOverflow { len: usize },

    /// The global allocator returned null.
    #[error("out of memory allocating {bytes} bytes")]
    OutOfMemory { bytes: usize },
}

/// Errors from padding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PadError {
    /// Mirroring or wrapping needs at least one element per axis.
    #[error("cannot pad an empty input in {mode} mode")]
    EmptyInput { mode: &'static str },

    /// Slice length does not match the stated shape.
    #[error("data length {len} != rows {rows} * cols {cols}")]
    ShapeMismatch { len: usize, rows: usize, cols: usize },

    /// Padded extent overflows `usize`.
    #[error("padded extent overflows")]
    Overflow,
}

/// Errors from size sweep expansion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    #[error("empty range: lo {lo} > hi {hi}")]
    EmptyRange { lo: usize, hi: usize },

    #[error("range multiplier must be at least 2, got {0}")]
    BadMultiplier(usize),

    #[error("dense sweep step must be non-zero")]
    ZeroStep,
}

/// Errors loading the benchmark configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config field '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

/// Any error raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Alloc(#[from] AllocError),

    #[error(transparent)]
    Pad(#[from] PadError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
