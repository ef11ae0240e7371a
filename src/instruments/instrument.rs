use crate::{error::Result, music::Music, stage::Stage};

/// Core trait shared by every playable instrument
///
/// Instruments tune themselves and play music, and `perform` strings the two
/// together onto a [`Stage`]. `tune` has no default: a type that cannot tune
/// is not an instrument.
pub trait Instrument {
    /// Brand label set at construction.
    fn brand(&self) -> &str;

    /// Short, human-readable kind ("piano", "bass guitar", ...)
    fn kind(&self) -> &'static str;

    /// Get ready to play. May change the state of attached equipment.
    fn tune(&self) -> String;

    /// Render music the way this instrument plays it
    ///
    /// Default implementation returns the music's prepared notes unchanged.
    fn play(&self, music: &Music) -> String {
        music.prepared()
    }

    /// Tune, then play, emitting both lines to the stage in that order.
    fn perform(&self, music: &Music, stage: &mut dyn Stage) -> Result<()> {
        log::debug!("{} {} performing", self.brand(), self.kind());
        stage.emit(self.tune())?;
        stage.emit(self.play(music))
    }
}

/// Allow boxed instruments to be used as instruments (for dynamic dispatch)
impl<I: Instrument + ?Sized> Instrument for Box<I> {
    fn brand(&self) -> &str {
        (**self).brand()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn tune(&self) -> String {
        (**self).tune()
    }

    fn play(&self, music: &Music) -> String {
        (**self).play(music)
    }

    fn perform(&self, music: &Music, stage: &mut dyn Stage) -> Result<()> {
        (**self).perform(music, stage)
    }
}
