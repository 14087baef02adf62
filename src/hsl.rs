//! Model a color with the HSL notation.

use crate::{Component, Error, Result};

etchpad_macros::gen_model! {
    /// A color specified with the HSL notation. The hue is in degrees, the
    /// saturation and lightness are percentages.
    pub struct Hsl {
        /// The hue component of the color, in `[0, 360)`.
        hue: Component,
        /// The saturation component of the color, in `[0, 100]`.
        saturation: Component,
        /// The lightness component of the color, in `[0, 100]`.
        lightness: Component,
    }
}

impl Hsl {
    /// Create a new color, failing if any component falls outside of its
    /// range or is NaN.
    pub fn try_new(hue: Component, saturation: Component, lightness: Component) -> Result<Self> {
        if !(0.0..360.0).contains(&hue) {
            return Err(Error::out_of_range("hue", hue, 0.0, 360.0));
        }
        if !(0.0..=100.0).contains(&saturation) {
            return Err(Error::out_of_range("saturation", saturation, 0.0, 100.0));
        }
        if !(0.0..=100.0).contains(&lightness) {
            return Err(Error::out_of_range("lightness", lightness, 0.0, 100.0));
        }

        Ok(Self::new(hue, saturation, lightness))
    }

    /// Return the same color with a different lightness.
    pub fn with_lightness(&self, lightness: Component) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_construction() {
        let hsl = Hsl::try_new(120.0, 50.0, 25.0).unwrap();
        assert_eq!(hsl, Hsl::new(120.0, 50.0, 25.0));

        assert!(matches!(
            Hsl::try_new(360.0, 0.0, 0.0),
            Err(Error::OutOfRangeInput { name: "hue", .. })
        ));
        assert!(matches!(
            Hsl::try_new(0.0, -1.0, 0.0),
            Err(Error::OutOfRangeInput { name: "saturation", .. })
        ));
        assert!(matches!(
            Hsl::try_new(0.0, 0.0, Component::NAN),
            Err(Error::OutOfRangeInput { name: "lightness", .. })
        ));
    }

    #[test]
    fn replace_lightness() {
        let hsl = Hsl::new(25.0, 75.0, 47.0).with_lightness(10.0);
        assert_eq!(hsl.to_array(), [25.0, 75.0, 10.0]);
    }
}
