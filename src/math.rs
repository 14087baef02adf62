//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Linearly interpolate from `a` to `b` using `t` as the progress between
/// them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // `rem_euclid` can round up to the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Clamp a percentage into `[0, 100]`. NaN becomes 0.
pub fn clamp_percent(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        num_traits::clamp(value, 0.0, 100.0)
    }
}

/// Scale a unit value to a channel byte, rounding to the nearest integer.
pub fn unit_to_channel(value: Component) -> u8 {
    num_traits::clamp((value * 255.0).round(), 0.0, 255.0) as u8
}
