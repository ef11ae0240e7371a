//! Piano.
//!
//! 88 keys (52 white, 36 black) and optionally a set of pedals.
//!
//! # Pedals
//!
//! [`Piano::play_using_pedals`] takes an explicit request to use the pedals,
//! and [`Instrument::play`] asks for them exactly when the piano has some.
//! The rendered line currently says "with pedals" whether or not they are
//! engaged; the decision is only logged.

use super::Instrument;
use crate::music::Music;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piano {
    brand: String,
    has_pedals: bool,
}

impl Piano {
    pub const WHITE_KEYS: u8 = 52;
    pub const BLACK_KEYS: u8 = 36;
    pub const KEY_COUNT: u8 = Self::WHITE_KEYS + Self::BLACK_KEYS;

    /// Create a piano without pedals.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            has_pedals: false,
        }
    }

    pub fn with_pedals(mut self, has_pedals: bool) -> Self {
        self.has_pedals = has_pedals;
        self
    }

    pub fn has_pedals(&self) -> bool {
        self.has_pedals
    }

    /// Play, asking for the pedals to be used or not.
    pub fn play_using_pedals(&self, music: &Music, using_pedals: bool) -> String {
        let engaged = self.has_pedals && using_pedals;
        log::trace!("{} piano pedals engaged: {engaged}", self.brand);

        format!("Play piano notes {} with pedals", music.prepared())
    }
}

impl Instrument for Piano {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn kind(&self) -> &'static str {
        "piano"
    }

    fn tune(&self) -> String {
        format!("Piano standard tuning for {}.", self.brand)
    }

    fn play(&self, music: &Music) -> String {
        self.play_using_pedals(music, self.has_pedals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tuning() {
        let piano = Piano::new("Yamaha");
        assert_eq!(piano.tune(), "Piano standard tuning for Yamaha.");
    }

    #[test]
    fn pedal_flag_does_not_change_output() {
        let music = Music::new(["C", "G", "F"]);
        let expected = "Play piano notes C G F with pedals";

        for has_pedals in [true, false] {
            let piano = Piano::new("Yamaha").with_pedals(has_pedals);
            assert_eq!(piano.play(&music), expected);
            assert_eq!(piano.play_using_pedals(&music, true), expected);
            assert_eq!(piano.play_using_pedals(&music, false), expected);
        }
    }

    #[test]
    fn no_pedals_by_default() {
        assert!(!Piano::new("Steinway").has_pedals());
        assert!(Piano::new("Steinway").with_pedals(true).has_pedals());
    }

    #[test]
    fn eighty_eight_keys() {
        assert_eq!(Piano::KEY_COUNT, 88);
    }
}
