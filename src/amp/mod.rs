//! Amplifier shared by the electric-family guitars.

/*
Power and Volume
================

An amplifier has two pieces of state that behave independently:

  power     Off or On. Only plug_in() and unplug() change it, and both are
            idempotent: plugging in a running amp does nothing.

  volume    A whole number dial from 0 to 10. Turning the dial always moves
            it, even with the amp unplugged, but an unplugged amp is silent.

The State Machine
-----------------

            plug_in()
    +-----+ ---------> +----+
    | Off |            | On |
    +-----+ <--------- +----+
             unplug()

Reading the Dial
----------------

    stored volume:   7     7     7
    power:           Off   On    Off
    volume():        0     7     0

Writes are clamped, never rejected:

    set_volume(-3)  ->  stored 0
    set_volume(42)  ->  stored 10

Sharing
-------

Two guitars can be plugged into the same amplifier. Each guitar holds an
`Rc<Amplifier>` and the power/volume live in `Cell`s, so a change made while
tuning one guitar is heard when the other one plays. Everything happens on a
single thread, one call at a time.
*/

use std::cell::Cell;
use std::rc::Rc;

use crate::{MAX_VOLUME, MIN_VOLUME};

/// Power state of an [`Amplifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    Off,
    On,
}

/// A small stateful amplifier with a clamped volume dial.
#[derive(Debug)]
pub struct Amplifier {
    power: Cell<Power>,
    volume: Cell<i32>, // stored dial position, always within MIN_VOLUME..=MAX_VOLUME
}

impl Amplifier {
    /// Create an unplugged amplifier with the dial at zero.
    pub fn new() -> Self {
        Self {
            power: Cell::new(Power::Off),
            volume: Cell::new(MIN_VOLUME),
        }
    }

    /// Create an amplifier ready to be shared between instruments.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Switch on. Does nothing if already on.
    pub fn plug_in(&self) {
        if self.power.replace(Power::On) == Power::Off {
            log::debug!("amplifier plugged in (dial at {})", self.volume.get());
        }
    }

    /// Switch off. Does nothing if already off.
    pub fn unplug(&self) {
        if self.power.replace(Power::Off) == Power::On {
            log::debug!("amplifier unplugged");
        }
    }

    pub fn power(&self) -> Power {
        self.power.get()
    }

    pub fn is_on(&self) -> bool {
        self.power.get() == Power::On
    }

    /// Audible volume: the dial position while on, 0 while off.
    pub fn volume(&self) -> i32 {
        match self.power.get() {
            Power::On => self.volume.get(),
            Power::Off => 0,
        }
    }

    /// Move the dial. Values outside the dial's range are clamped.
    pub fn set_volume(&self, volume: i32) {
        let clamped = volume.clamp(MIN_VOLUME, MAX_VOLUME);
        if clamped != volume {
            log::trace!("volume {volume} clamped to {clamped}");
        }
        self.volume.set(clamped);
    }
}

impl Default for Amplifier {
    fn default() -> Self {
        Self::new()
    }
}
