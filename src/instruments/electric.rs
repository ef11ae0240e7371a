//! Electric guitar.
//!
//! Solid body, light strings, and no sound of its own: it plays through a
//! shared [`Amplifier`]. Tuning switches the amp on and sets a moderate
//! volume, so the volume reported while playing is whatever the amp is at.
//!
//! # Sharing an amp
//!
//! ```ignore
//! let amp = Amplifier::shared();
//! let lead = ElectricGuitar::new("Gibson", Rc::clone(&amp));
//! let bass = BassGuitar::new("Fender", amp);
//! ```

use std::rc::Rc;

use super::{
    guitar::{Guitar, Stringed},
    Instrument,
};
use crate::{
    amp::Amplifier,
    music::{
        tunings::{spoken, STANDARD_TUNING},
        Music,
    },
    TUNING_VOLUME,
};

/// Gauge used when an electric guitar is built without naming one.
pub const DEFAULT_STRING_GAUGE: &str = "light";

#[derive(Debug, Clone)]
pub struct ElectricGuitar {
    guitar: Guitar,
    amplifier: Rc<Amplifier>,
}

impl ElectricGuitar {
    pub fn new(brand: impl Into<String>, amplifier: Rc<Amplifier>) -> Self {
        Self {
            guitar: Guitar::with_string_gauge(brand, DEFAULT_STRING_GAUGE),
            amplifier,
        }
    }

    pub fn with_string_gauge(self, string_gauge: impl Into<String>) -> Self {
        Self {
            guitar: Guitar::with_string_gauge(self.guitar.brand(), string_gauge),
            amplifier: self.amplifier,
        }
    }

    pub fn amplifier(&self) -> &Rc<Amplifier> {
        &self.amplifier
    }
}

impl Stringed for ElectricGuitar {
    fn string_gauge(&self) -> &str {
        self.guitar.string_gauge()
    }
}

impl Instrument for ElectricGuitar {
    fn brand(&self) -> &str {
        self.guitar.brand()
    }

    fn kind(&self) -> &'static str {
        "electric guitar"
    }

    fn tune(&self) -> String {
        self.amplifier.plug_in();
        self.amplifier.set_volume(TUNING_VOLUME);
        // "electic" is the established wording of this message
        format!(
            "Tune {} electic with {}",
            self.brand(),
            spoken(&STANDARD_TUNING)
        )
    }

    fn play(&self, music: &Music) -> String {
        format!(
            "Play solo {} at volume {}.",
            music.prepared(),
            self.amplifier.volume()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_powers_the_amp_to_five() {
        let amp = Amplifier::shared();
        let guitar = ElectricGuitar::new("Gibson", Rc::clone(&amp));
        assert!(!amp.is_on());

        assert_eq!(guitar.tune(), "Tune Gibson electic with E A D G B E");
        assert!(amp.is_on());
        assert_eq!(amp.volume(), 5);
    }

    #[test]
    fn plays_at_current_amp_volume() {
        let amp = Amplifier::shared();
        let guitar = ElectricGuitar::new("Gibson", Rc::clone(&amp));
        let music = Music::new(["C", "G", "F"]);

        // Untuned: amp is still off
        assert_eq!(guitar.play(&music), "Play solo C G F at volume 0.");

        guitar.tune();
        assert_eq!(guitar.play(&music), "Play solo C G F at volume 5.");

        amp.set_volume(9);
        assert_eq!(guitar.play(&music), "Play solo C G F at volume 9.");
    }

    #[test]
    fn light_strings_by_default() {
        let guitar = ElectricGuitar::new("Gibson", Amplifier::shared());
        assert_eq!(guitar.string_gauge(), "light");

        let guitar = guitar.with_string_gauge("medium");
        assert_eq!(guitar.string_gauge(), "medium");
        assert_eq!(guitar.brand(), "Gibson");
    }
}
