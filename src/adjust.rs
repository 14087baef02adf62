//! Shift the lightness of a color toward black or white while keeping its
//! hue and saturation.
//!
//! The shift is driven by a [`Brightness`] slider value in `0..=100` with the
//! neutral point at 50. Moving the slider down scales the lightness toward 0,
//! moving it up moves the lightness the same fraction of the remaining
//! distance toward 100.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{
    math::{clamp_percent, lerp},
    Component, Error, Hsl, Result, Rgb,
};

/// A brightness slider value in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub struct Brightness(u8);

impl Brightness {
    /// The smallest slider value, driving every color to black.
    pub const MIN: Self = Self(0);

    /// The neutral slider value; colors are left unchanged.
    pub const NEUTRAL: Self = Self(50);

    /// The largest slider value, driving every color to white.
    pub const MAX: Self = Self(100);

    /// Create a new slider value, failing outside of `0..=100`.
    pub fn new(value: i32) -> Result<Self> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(Error::out_of_range("brightness", value, 0, 100))
        }
    }

    /// Return the raw slider value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The signed distance from the neutral point, in `[-1, 1]`.
    pub fn offset(self) -> Component {
        (self.0 as Component - 50.0) / 50.0
    }

    /// Apply the slider offset to a lightness percentage.
    pub fn apply(self, lightness: Component) -> Component {
        let t = self.offset();

        let lightness = if t < 0.0 {
            lerp(lightness, 0.0, -t)
        } else if t > 0.0 {
            lerp(lightness, 100.0, t)
        } else {
            lightness
        };

        clamp_percent(lightness)
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<i64> for Brightness {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        i32::try_from(value)
            .map_err(|_| Error::out_of_range("brightness", value as f64, 0, 100))
            .and_then(Self::new)
    }
}

impl FromStr for Brightness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::InvalidNumber(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Shift the lightness of `rgb` according to the slider value.
pub fn adjust_lightness(rgb: Rgb, brightness: Brightness) -> Rgb {
    rgb.adjust_lightness(brightness)
}

impl Rgb {
    /// Shift the lightness of this color according to the slider value.
    pub fn adjust_lightness(&self, brightness: Brightness) -> Rgb {
        self.to_hsl().adjust_lightness(brightness).to_rgb()
    }
}

impl Hsl {
    /// Shift the lightness of this color according to the slider value.
    pub fn adjust_lightness(&self, brightness: Brightness) -> Hsl {
        self.with_lightness(brightness.apply(self.lightness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_rgb_near;
    use pretty_assertions::assert_eq;

    const SAMPLES: &[Rgb] = &[
        Rgb::new(255, 0, 0),
        Rgb::new(0, 128, 255),
        Rgb::new(210, 105, 30),
        Rgb::new(12, 200, 90),
        Rgb::new(250, 250, 240),
        Rgb::new(3, 1, 2),
        Rgb::new(128, 128, 128),
        Rgb::BLACK,
        Rgb::WHITE,
    ];

    fn slider(value: i32) -> Brightness {
        Brightness::new(value).unwrap()
    }

    #[test]
    fn slider_values() {
        assert_eq!(Brightness::default(), Brightness::NEUTRAL);
        assert_eq!(Brightness::NEUTRAL.offset(), 0.0);
        assert_eq!(Brightness::MIN.offset(), -1.0);
        assert_eq!(Brightness::MAX.offset(), 1.0);
        assert_eq!(slider(75).offset(), 0.5);
        assert_eq!(slider(75).value(), 75);
        assert_eq!(slider(75).to_string(), "75");

        assert!(matches!(
            Brightness::new(101),
            Err(Error::OutOfRangeInput { name: "brightness", .. })
        ));
        assert!(matches!(
            Brightness::new(-1),
            Err(Error::OutOfRangeInput { .. })
        ));
    }

    #[test]
    fn parse_slider_text() {
        assert_eq!(" 42 ".parse::<Brightness>().unwrap(), slider(42));
        assert!(matches!(
            "bright".parse::<Brightness>(),
            Err(Error::InvalidNumber(_))
        ));
        assert!(matches!(
            "150".parse::<Brightness>(),
            Err(Error::OutOfRangeInput { .. })
        ));
    }

    #[test]
    fn lightness_formula() {
        assert_eq!(slider(0).apply(40.0), 0.0);
        assert_eq!(slider(25).apply(40.0), 20.0);
        assert_eq!(slider(50).apply(40.0), 40.0);
        assert_eq!(slider(75).apply(40.0), 70.0);
        assert_eq!(slider(100).apply(40.0), 100.0);
    }

    #[test]
    fn red_is_driven_to_the_extremes() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(adjust_lightness(red, slider(0)), Rgb::BLACK);
        assert_eq!(adjust_lightness(red, slider(100)), Rgb::WHITE);
    }

    #[test]
    fn black_brightens_to_gray() {
        let gray = adjust_lightness(Rgb::BLACK, slider(75));
        assert_eq!(gray.red, gray.green);
        assert_eq!(gray.green, gray.blue);
        // Half way from 0 to 100.
        assert_eq!(gray, Rgb::new(128, 128, 128));
        approx::assert_abs_diff_eq!(gray.to_hsl().lightness, 50.0, epsilon = 0.5);
    }

    #[test]
    fn neutral_is_identity() {
        for &rgb in SAMPLES {
            assert_rgb_near!(rgb.adjust_lightness(Brightness::NEUTRAL), rgb);
        }

        for red in (0..=255u8).step_by(15) {
            for green in (0..=255u8).step_by(15) {
                for blue in (0..=255u8).step_by(15) {
                    let rgb = Rgb::new(red, green, blue);
                    assert_rgb_near!(rgb.adjust_lightness(Brightness::NEUTRAL), rgb);
                }
            }
        }
    }

    #[test]
    fn darkening_is_monotonic() {
        for &rgb in SAMPLES {
            let mut previous = rgb.adjust_lightness(slider(50)).to_hsl().lightness;
            for value in (0..50).rev() {
                let lightness = rgb.adjust_lightness(slider(value)).to_hsl().lightness;
                assert!(
                    lightness <= previous,
                    "{rgb} at {value}: {lightness} > {previous}"
                );
                previous = lightness;
            }
        }
    }

    #[test]
    fn brightening_is_monotonic() {
        for &rgb in SAMPLES {
            let mut previous = rgb.adjust_lightness(slider(50)).to_hsl().lightness;
            for value in 51..=100 {
                let lightness = rgb.adjust_lightness(slider(value)).to_hsl().lightness;
                assert!(
                    lightness >= previous,
                    "{rgb} at {value}: {lightness} < {previous}"
                );
                previous = lightness;
            }
        }
    }

    #[test]
    fn extremes() {
        for &rgb in SAMPLES {
            let lightness = rgb.to_hsl().lightness;
            if lightness > 0.0 {
                assert_eq!(rgb.adjust_lightness(Brightness::MIN), Rgb::BLACK);
            }
            if lightness < 100.0 {
                assert_eq!(rgb.adjust_lightness(Brightness::MAX), Rgb::WHITE);
            }
        }
    }

    #[test]
    fn hue_is_kept() {
        let base = Rgb::new(210, 105, 30);
        for value in [20, 40, 60, 80] {
            let hsl = base.adjust_lightness(slider(value)).to_hsl();
            approx::assert_abs_diff_eq!(hsl.hue, 25.0, epsilon = 2.0);
        }
    }
}
