//! Acoustic guitar.
//!
//! Six steel strings over a hollow body, no amplification. Tunes to standard
//! E A D G B E and plays everything as a folk tune.

use super::{
    guitar::{Guitar, Stringed, DEFAULT_STRING_GAUGE},
    Instrument,
};
use crate::music::{
    tunings::{spoken, STANDARD_TUNING},
    Music,
};

#[derive(Debug, Clone)]
pub struct AcousticGuitar {
    guitar: Guitar,
}

impl AcousticGuitar {
    pub const NUMBER_OF_STRINGS: usize = STANDARD_TUNING.len();
    pub const FRET_COUNT: u8 = 20;

    /// Create an acoustic guitar with medium strings.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            guitar: Guitar::with_string_gauge(brand, DEFAULT_STRING_GAUGE),
        }
    }

    /// Restring with a different gauge.
    pub fn with_string_gauge(self, string_gauge: impl Into<String>) -> Self {
        Self {
            guitar: Guitar::with_string_gauge(self.guitar.brand(), string_gauge),
        }
    }
}

impl Stringed for AcousticGuitar {
    fn string_gauge(&self) -> &str {
        self.guitar.string_gauge()
    }
}

impl Instrument for AcousticGuitar {
    fn brand(&self) -> &str {
        self.guitar.brand()
    }

    fn kind(&self) -> &'static str {
        "acoustic guitar"
    }

    fn tune(&self) -> String {
        format!(
            "Tune {} acoustic with {}",
            self.brand(),
            spoken(&STANDARD_TUNING)
        )
    }

    fn play(&self, music: &Music) -> String {
        format!("Play folk tune on frets {}", music.prepared())
    }
}
