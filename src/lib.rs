//! etchpad provides the color math and drawing state behind a pixel grid
//! sketching toy: hovering over a cell paints it with a color picked by the
//! draw mode, shifted toward black or white by a brightness slider.
//!
//! ```rust
//! use etchpad::{adjust_lightness, Brightness, Rgb};
//! let base = Rgb::from_hex("#ff0000").unwrap();
//! let darker = adjust_lightness(base, Brightness::new(25).unwrap());
//! assert_eq!(darker, Rgb::new(128, 0, 0));
//! ```

#![deny(missing_docs)]

mod adjust;
mod color;
mod config;
mod convert;
mod error;
mod grid;
mod hsl;
mod math;
mod mode;
mod rgb;
mod session;

pub use adjust::{adjust_lightness, Brightness};
pub use color::{Component, Components};
pub use config::Config;
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use error::{Error, Result};
pub use grid::{CellRect, Grid, GridSize, Point};
pub use hsl::Hsl;
pub use mode::{DrawMode, DrawModes};
pub use rgb::{random_rgb, Rgb};
pub use session::Session;
