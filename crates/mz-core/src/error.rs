//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `MzError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `mz-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MzError {
    /// Rejected at construction time; never produced once a simulation runs.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `mz-*` crates.
pub type MzResult<T> = Result<T, MzError>;
