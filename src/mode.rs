//! Draw modes decide which base color a painted cell starts from.

use std::{fmt, str::FromStr};

use bitflags::bitflags;
use serde::Deserialize;

use crate::Error;

/// The policy used to pick the base color of a painted cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// A new random color for every cell.
    #[default]
    Rainbow,
    /// Solid black.
    Black,
    /// The color last chosen with the color picker.
    Color,
    /// Paint the erase color, ignoring brightness.
    Eraser,
}

impl DrawMode {
    /// Every draw mode, in toolbar order.
    pub const ALL: [DrawMode; 4] = [Self::Rainbow, Self::Black, Self::Color, Self::Eraser];

    /// The flag marking this mode in a [`DrawModes`] set.
    pub const fn flag(self) -> DrawModes {
        match self {
            Self::Rainbow => DrawModes::RAINBOW,
            Self::Black => DrawModes::BLACK,
            Self::Color => DrawModes::COLOR,
            Self::Eraser => DrawModes::ERASER,
        }
    }

    /// The lower case name of the mode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Black => "black",
            Self::Color => "color",
            Self::Eraser => "eraser",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrawMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidDrawMode(s.to_string()))
    }
}

bitflags! {
    /// The set of draw modes a toolbar offers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DrawModes : u8 {
        /// Offer [`DrawMode::Rainbow`].
        const RAINBOW = 1 << 0;
        /// Offer [`DrawMode::Black`].
        const BLACK = 1 << 1;
        /// Offer [`DrawMode::Color`].
        const COLOR = 1 << 2;
        /// Offer [`DrawMode::Eraser`].
        const ERASER = 1 << 3;

        /// The toolbar without a color picker.
        const CLASSIC = Self::RAINBOW.bits() | Self::BLACK.bits() | Self::ERASER.bits();
    }
}

impl DrawModes {
    /// Return true if `mode` is offered.
    pub fn offers(&self, mode: DrawMode) -> bool {
        self.contains(mode.flag())
    }

    /// Iterate over the offered modes in toolbar order.
    pub fn modes(&self) -> impl Iterator<Item = DrawMode> + '_ {
        DrawMode::ALL.into_iter().filter(|mode| self.offers(*mode))
    }
}

impl Default for DrawModes {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<DrawMode> for DrawModes {
    fn from_iter<T: IntoIterator<Item = DrawMode>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |modes, mode| modes | mode.flag())
    }
}
