//! Bass guitar.
//!
//! Four heavy strings tuned E A D G, an octave below the guitar. Like the
//! electric guitar it plays through a shared [`Amplifier`], but tuning only
//! switches the amp on and leaves the volume dial where it is.

use std::rc::Rc;

use super::{
    guitar::{Guitar, Stringed},
    Instrument,
};
use crate::{
    amp::Amplifier,
    music::{
        tunings::{spoken, BASS_TUNING},
        Music,
    },
};

/// Gauge used when a bass is built without naming one.
pub const DEFAULT_STRING_GAUGE: &str = "heavy";

#[derive(Debug, Clone)]
pub struct BassGuitar {
    guitar: Guitar,
    amplifier: Rc<Amplifier>,
}

impl BassGuitar {
    pub const NUMBER_OF_STRINGS: usize = BASS_TUNING.len();

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

impl Stringed for BassGuitar {
    fn string_gauge(&self) -> &str {
        self.guitar.string_gauge()
    }
}

impl Instrument for BassGuitar {
    fn brand(&self) -> &str {
        self.guitar.brand()
    }

    fn kind(&self) -> &'static str {
        "bass guitar"
    }

    fn tune(&self) -> String {
        self.amplifier.plug_in();
        format!("Tune {} bass with {}", self.brand(), spoken(&BASS_TUNING))
    }

    fn play(&self, music: &Music) -> String {
        format!(
            "Play bass line {} at volume {}.",
            music.prepared(),
            self.amplifier.volume()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_powers_the_amp_without_touching_volume() {
        let amp = Amplifier::shared();
        amp.set_volume(3);
        let bass = BassGuitar::new("Fender", Rc::clone(&amp));

        assert_eq!(bass.tune(), "Tune Fender bass with E A D G");
        assert!(amp.is_on());
        assert_eq!(amp.volume(), 3);
    }

    #[test]
    fn fresh_amp_stays_at_zero_after_tuning() {
        let bass = BassGuitar::new("Fender", Amplifier::shared());
        bass.tune();
        let music = Music::new(["E", "E", "A"]);
        assert_eq!(bass.play(&music), "Play bass line E E A at volume 0.");
    }

    #[test]
    fn four_heavy_strings() {
        let bass = BassGuitar::new("Fender", Amplifier::shared());
        assert_eq!(bass.string_gauge(), "heavy");
        assert_eq!(BassGuitar::NUMBER_OF_STRINGS, 4);
    }
}
