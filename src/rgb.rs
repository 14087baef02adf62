//! Model a color with 8-bit red, green and blue channels.

use std::{fmt, str::FromStr};

use rand::Rng;

use crate::{Error, Result};

etchpad_macros::gen_model! {
    /// A fully opaque color with three 8-bit channels.
    #[derive(serde::Deserialize)]
    #[serde(try_from = "String")]
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from unchecked integer channels, failing if any channel
    /// falls outside `0..=255`.
    pub fn try_from_channels(red: i32, green: i32, blue: i32) -> Result<Self> {
        let channel = |name: &'static str, value: i32| {
            u8::try_from(value).map_err(|_| Error::out_of_range(name, value, 0, 255))
        };

        Ok(Self::new(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }

    /// Decode a `#RRGGBB` hex color. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        // `from_str_radix` accepts a leading sign, so check the digits first.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| Error::InvalidColorFormat(hex.to_string()))?;

        Ok(Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// Generate a color with each channel drawn uniformly from `0..=255`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    /// Format the color as a lower case `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Format the color as a CSS `rgb()` function.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Generate a random color using the thread local generator.
pub fn random_rgb() -> Rgb {
    Rgb::random(&mut rand::rng())
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
