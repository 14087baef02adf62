//! Defaults for a drawing session, loaded from TOML.
//!
//! ```toml
//! grid_size = 16
//! container_size = 640.0
//! brightness = 50
//! draw_mode = "rainbow"
//! modes = ["rainbow", "black", "color", "eraser"]
//! erase_color = "#ffffff"
//! picked_color = "#000000"
//! ```
//!
//! Every key is optional.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::{
    adjust::Brightness,
    grid::{Grid, GridSize},
    DrawMode, DrawModes, Error, Result, Rgb,
};

/// Configuration of the grid and the initial toolbar state.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Cells along each side of the grid.
    pub grid_size: GridSize,
    /// Length of the container's sides in pixels.
    pub container_size: f32,
    /// Initial brightness slider value.
    pub brightness: Brightness,
    /// Initial draw mode. Must be one of `modes`.
    pub draw_mode: DrawMode,
    /// The draw modes the toolbar offers.
    pub modes: Vec<DrawMode>,
    /// Color painted by the eraser and shown by unpainted cells.
    pub erase_color: Rgb,
    /// Initial value of the color picker.
    pub picked_color: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            container_size: 640.0,
            brightness: Brightness::default(),
            draw_mode: DrawMode::default(),
            modes: DrawMode::ALL.to_vec(),
            erase_color: Rgb::WHITE,
            picked_color: Rgb::BLACK,
        }
    }
}

impl Config {
    /// Parse and validate a configuration.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Check the values that the typed fields can not check on their own.
    pub fn validate(&self) -> Result<()> {
        if !(self.container_size.is_finite() && self.container_size > 0.0) {
            return Err(Error::out_of_range(
                "container size",
                self.container_size,
                f32::MIN_POSITIVE,
                f32::MAX,
            ));
        }

        if !self.modes().offers(self.draw_mode) {
            return Err(Error::UnsupportedMode(self.draw_mode));
        }

        Ok(())
    }

    /// The draw modes the toolbar offers.
    pub fn modes(&self) -> DrawModes {
        self.modes.iter().copied().collect()
    }

    /// Build an unpainted grid with the configured size.
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.grid_size, self.container_size)
    }
}
