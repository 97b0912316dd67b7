//! Error types for Daygrid operations.
//!
//! This module provides the main error type [`DaygridError`]. The engine
//! itself has no external dependencies, so every variant is an input or
//! configuration contract violation rather than a transient fault; there
//! is nothing to retry.

use std::io;

use thiserror::Error;

/// The main error type for Daygrid operations.
#[derive(Debug, Error)]
pub enum DaygridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout width must be finite and strictly positive. Rejected
    /// eagerly; no partial layout is attempted.
    #[error("invalid layout width: {width}")]
    InvalidWidth { width: f32 },

    /// The display window must satisfy `start_hour < end_hour <= 24`.
    #[error("invalid display window: hours {start_hour}..{end_hour}")]
    InvalidWindow { start_hour: u32, end_hour: u32 },

    /// A page index outside the calendar's date window.
    #[error("page {index} out of range for a calendar of {pages} pages")]
    PageOutOfRange { index: usize, pages: usize },

    #[error("invalid events input: {0}")]
    Events(String),

    #[error("Config error: {0}")]
    Config(String),
}
