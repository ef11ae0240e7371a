//! Gig - line-up builder and runner

use color_eyre::eyre::{Result as EyreResult, WrapErr};

use ensemble::{
    band::Band,
    instruments::Instrument,
    music::Music,
    stage::Console,
};

/// Main application builder
pub struct Gig {
    music: Music,
    band: Band,
}

impl Gig {
    /// Create a gig with no music and an empty stage
    pub fn new() -> Self {
        Self {
            music: Music::default(),
            band: Band::new(),
        }
    }

    /// Set the music every instrument will play
    pub fn music(mut self, music: Music) -> Self {
        self.music = music;
        self
    }

    /// Add an instrument to the end of the line-up
    pub fn instrument<I: Instrument + 'static>(mut self, instrument: I) -> Self {
        self.band = self.band.with(instrument);
        self
    }

    /// Print the line-up, then perform to standard output
    pub fn run(self) -> EyreResult<()> {
        println!("=== Ensemble ===");
        println!("Music: {}", self.music);
        for instrument in self.band.instruments() {
            println!("  {}: {}", instrument.kind(), instrument.brand());
        }
        println!();

        let mut console = Console::stdout();
        self.band
            .perform(&self.music, &mut console)
            .wrap_err("performance was interrupted")
    }
}

impl Default for Gig {
    fn default() -> Self {
        Self::new()
    }
}
