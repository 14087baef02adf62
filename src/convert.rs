//! Conversions between the RGB and HSL notations.
//!
//! RGB channels are bytes, HSL uses degrees and percentages. Internally both
//! directions work on [`Components`] normalized to `[0, 1]` (hue excepted),
//! and only the RGB producing end rounds.
//!
//! ```rust
//! use etchpad::{Hsl, Rgb};
//! let hsl = Rgb::new(255, 0, 0).to_hsl();
//! assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0));
//! assert_eq!(hsl.to_rgb(), Rgb::new(255, 0, 0));
//! ```

use crate::{
    color::{Component, Components},
    math::{clamp_percent, normalize_hue, unit_to_channel},
    Hsl, Rgb,
};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_components());
        Hsl::new(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Return the channels normalized to `[0, 1]`.
    pub fn to_components(&self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB channels. The hue is
    /// wrapped into `[0, 360)` and the percentages are clamped first.
    pub fn to_rgb(&self) -> Rgb {
        let from = Components(
            normalize_hue(self.hue),
            clamp_percent(self.saturation) / 100.0,
            clamp_percent(self.lightness) / 100.0,
        );
        let Components(red, green, blue) = util::hsl_to_rgb(&from);
        Rgb::new(
            unit_to_channel(red),
            unit_to_channel(green),
            unit_to_channel(blue),
        )
    }
}

/// Convert RGB channels to the HSL notation.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert a color in the HSL notation to RGB channels.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

mod util {
    use crate::{
        color::{Component, Components},
        math::normalize_hue,
    };

    /// Convert from RGB to HSL. Input channels are in `[0, 1]`, the output
    /// hue is in degrees and saturation and lightness are in `[0, 1]`.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;

        // Achromatic.
        if max == min {
            return Components(0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = (delta / (1.0 - (2.0 * lightness - 1.0).abs())).min(1.0);

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Components(normalize_hue(hue), saturation, lightness)
    }

    /// Convert from HSL to RGB. The hue is in degrees in `[0, 360)`,
    /// saturation and lightness are in `[0, 1]`. Output channels are in
    /// `[0, 1]`.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (red, green, blue): (Component, Component, Component) = if hue < 60.0 {
            (chroma, x, 0.0)
        } else if hue < 120.0 {
            (x, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, x)
        } else if hue < 240.0 {
            (0.0, x, chroma)
        } else if hue < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Components(red + m, green + m, blue + m)
    }

}
