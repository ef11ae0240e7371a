// Purpose: perform one piece of music across many instruments, in order

use crate::{error::Result, instruments::Instrument, music::Music, stage::Stage};

/// An ordered line-up of instruments
///
/// Built once, then performed as many times as needed. The band never owns
/// amplifiers; guitars bring their own shared handles.
#[derive(Default)]
pub struct Band {
    instruments: Vec<Box<dyn Instrument>>,
}

impl Band {
    /// Create an empty band
    pub fn new() -> Self {
        Self {
            instruments: Vec::new(),
        }
    }

    /// Add an instrument to the end of the line-up
    pub fn with<I: Instrument + 'static>(mut self, instrument: I) -> Self {
        self.instruments.push(Box::new(instrument));
        self
    }

    /// Perform the music on every instrument, one after another
    ///
    /// Each instrument tunes and plays before the next one starts. The first
    /// stage failure stops the whole performance.
    pub fn perform(&self, music: &Music, stage: &mut dyn Stage) -> Result<()> {
        log::debug!(
            "band of {} performing \"{}\"",
            self.instruments.len(),
            music
        );
        for instrument in &self.instruments {
            instrument.perform(music, stage)?;
        }
        Ok(())
    }

    pub fn instruments(&self) -> &[Box<dyn Instrument>] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl From<Vec<Box<dyn Instrument>>> for Band {
    fn from(instruments: Vec<Box<dyn Instrument>>) -> Self {
        Self { instruments }
    }
}
