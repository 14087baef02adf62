//! The drawing state shared by every paint event: the selected draw mode, the
//! brightness slider and the colors the toolbar holds.

use rand::Rng;
use tracing::debug;

use crate::{adjust::Brightness, Config, DrawMode, DrawModes, Error, Result, Rgb};

/// State read by each paint event and written by the toolbar controls.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    mode: DrawMode,
    modes: DrawModes,
    brightness: Brightness,
    picked: Rgb,
    erase: Rgb,
}

impl Session {
    /// Create a session from the configured defaults.
    pub fn new(config: &Config) -> Self {
        Self {
            mode: config.draw_mode,
            modes: config.modes(),
            brightness: config.brightness,
            picked: config.picked_color,
            erase: config.erase_color,
        }
    }

    /// The current draw mode.
    pub fn draw_mode(&self) -> DrawMode {
        self.mode
    }

    /// The draw modes the toolbar offers.
    pub fn modes(&self) -> DrawModes {
        self.modes
    }

    /// Select a draw mode. Fails if the toolbar does not offer it.
    pub fn set_draw_mode(&mut self, mode: DrawMode) -> Result<()> {
        if !self.modes.offers(mode) {
            return Err(Error::UnsupportedMode(mode));
        }
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "draw mode changed");
        }
        self.mode = mode;
        Ok(())
    }

    /// The current brightness slider value.
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Move the brightness slider.
    pub fn set_brightness(&mut self, brightness: Brightness) {
        debug!(%brightness, "brightness changed");
        self.brightness = brightness;
    }

    /// The color last chosen with the color picker.
    pub fn picked_color(&self) -> Rgb {
        self.picked
    }

    /// The color painted by the eraser.
    pub fn erase_color(&self) -> Rgb {
        self.erase
    }

    /// Store a color from the color picker and switch to
    /// [`DrawMode::Color`].
    pub fn pick_color(&mut self, color: Rgb) -> Result<()> {
        self.set_draw_mode(DrawMode::Color)?;
        self.picked = color;
        Ok(())
    }

    /// Decode a `#RRGGBB` value from the color picker and pick it.
    pub fn pick_hex(&mut self, hex: &str) -> Result<()> {
        let color = Rgb::from_hex(hex)?;
        self.pick_color(color)
    }

    /// The color the current mode starts from, before the brightness is
    /// applied. The eraser has no base color.
    pub fn base_color<R: Rng>(&self, rng: &mut R) -> Option<Rgb> {
        match self.mode {
            DrawMode::Rainbow => Some(Rgb::random(rng)),
            DrawMode::Black => Some(Rgb::BLACK),
            DrawMode::Color => Some(self.picked),
            DrawMode::Eraser => None,
        }
    }

    /// The final fill color for a cell being painted now.
    pub fn paint_color<R: Rng>(&self, rng: &mut R) -> Rgb {
        match self.base_color(rng) {
            Some(base) => base.adjust_lightness(self.brightness),
            None => self.erase,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn defaults() {
        let session = Session::default();
        assert_eq!(session.draw_mode(), DrawMode::Rainbow);
        assert_eq!(session.modes(), DrawModes::all());
        assert_eq!(session.brightness(), Brightness::NEUTRAL);
        assert_eq!(session.picked_color(), Rgb::BLACK);
        assert_eq!(session.erase_color(), Rgb::WHITE);
    }

    #[test]
    fn black_mode_follows_brightness() {
        let mut session = Session::default();
        session.set_draw_mode(DrawMode::Black).unwrap();
        assert_eq!(session.paint_color(&mut rng()), Rgb::BLACK);

        session.set_brightness(Brightness::new(75).unwrap());
        assert_eq!(session.paint_color(&mut rng()), Rgb::new(128, 128, 128));

        session.set_brightness(Brightness::MAX);
        assert_eq!(session.paint_color(&mut rng()), Rgb::WHITE);
    }

    #[test]
    fn eraser_ignores_brightness() {
        let mut session = Session::default();
        session.set_draw_mode(DrawMode::Eraser).unwrap();
        session.set_brightness(Brightness::MIN);
        assert_eq!(session.base_color(&mut rng()), None);
        assert_eq!(session.paint_color(&mut rng()), Rgb::WHITE);
    }

    #[test]
    fn picking_a_color_switches_mode() {
        let mut session = Session::default();
        session.pick_hex("#ff0000").unwrap();
        assert_eq!(session.draw_mode(), DrawMode::Color);
        assert_eq!(session.picked_color(), Rgb::new(255, 0, 0));
        assert_eq!(session.paint_color(&mut rng()), Rgb::new(255, 0, 0));

        session.set_brightness(Brightness::MIN);
        assert_eq!(session.paint_color(&mut rng()), Rgb::BLACK);
    }

    #[test]
    fn bad_picker_value_keeps_state() {
        let mut session = Session::default();
        assert!(matches!(
            session.pick_hex("#12345"),
            Err(Error::InvalidColorFormat(_))
        ));
        assert_eq!(session.draw_mode(), DrawMode::Rainbow);
        assert_eq!(session.picked_color(), Rgb::BLACK);
    }

    #[test]
    fn rainbow_is_seeded_by_the_caller() {
        let session = Session::default();
        let a = session.paint_color(&mut rng());
        let b = session.paint_color(&mut rng());
        assert_eq!(a, b);

        let mut shared = rng();
        let colors = (0..16)
            .map(|_| session.paint_color(&mut shared))
            .collect::<Vec<_>>();
        assert!(colors.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn unsupported_modes_are_rejected() {
        let config = Config {
            modes: vec![DrawMode::Rainbow, DrawMode::Black, DrawMode::Eraser],
            ..Config::default()
        };
        let mut session = Session::new(&config);
        assert_eq!(session.modes(), DrawModes::CLASSIC);

        assert!(matches!(
            session.set_draw_mode(DrawMode::Color),
            Err(Error::UnsupportedMode(DrawMode::Color))
        ));
        assert!(matches!(
            session.pick_color(Rgb::WHITE),
            Err(Error::UnsupportedMode(DrawMode::Color))
        ));
        assert_eq!(session.draw_mode(), DrawMode::Rainbow);
        assert_eq!(session.picked_color(), Rgb::BLACK);
    }
}
