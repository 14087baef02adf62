//! Numeric primitives shared by the color models.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all fractional components are stored
/// as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all fractional components are stored
/// as.
pub type Component = f64;

/// Represent the three components that describe any color, normalized to the
/// range the conversion math works in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl std::fmt::Display for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_components() {
        let c = Components(0.1, 0.2, 0.4).map(|v| v * 2.0);
        assert_eq!(c, Components(0.2, 0.4, 0.8));
    }

    #[test]
    fn display() {
        assert_eq!(Components(1.0, 0.5, 0.0).to_string(), "(1, 0.5, 0)");
    }
}
