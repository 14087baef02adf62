//! Errors produced when parsing or validating colors, slider values and grid
//! input.

use thiserror::Error;

use crate::DrawMode;

/// Error type for all fallible operations in this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A hex color was not exactly 6 hex digits after an optional `#`.
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    /// A value fell outside of its documented domain.
    #[error("{name} out of range: {value} (expected {min}..={max})")]
    OutOfRangeInput {
        /// What the value represents.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },

    /// Text that should hold an integer did not.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Text that does not name a draw mode.
    #[error("unknown draw mode: {0:?}")]
    InvalidDrawMode(String),

    /// The draw mode is not offered by the current toolbar.
    #[error("draw mode not available: {0}")]
    UnsupportedMode(DrawMode),

    /// A cell index past the end of the grid.
    #[error("cell out of bounds: {index} >= {count}")]
    CellOutOfBounds {
        /// The attempted index.
        index: usize,
        /// The number of cells in the grid.
        count: usize,
    },

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be deserialized.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn out_of_range(
        name: &'static str,
        value: impl Into<f64>,
        min: impl Into<f64>,
        max: impl Into<f64>,
    ) -> Self {
        Self::OutOfRangeInput {
            name,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
