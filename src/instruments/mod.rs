//! Ready-to-play instruments.
//!
//! Every instrument implements [`Instrument`], so a band can hold any mix of
//! them behind `Box<dyn Instrument>`. Guitars share their brand and strings
//! through the [`Guitar`] component; the electric ones also share an
//! [`Amplifier`](crate::amp::Amplifier) by handle.
//!
//! # Example
//!
//! ```ignore
//! use ensemble::{amp::Amplifier, instruments::*};
//! use std::rc::Rc;
//!
//! // Keys
//! let piano = Piano::new("Yamaha").with_pedals(true);
//!
//! // Strings
//! let acoustic = AcousticGuitar::new("Roland").with_string_gauge("light");
//!
//! // Plugged in, one amp between them
//! let amp = Amplifier::shared();
//! let electric = ElectricGuitar::new("Gibson", Rc::clone(&amp));
//! let bass = BassGuitar::new("Fender", amp);
//! ```

mod acoustic;
mod bass;
mod electric;
pub mod guitar;
mod instrument;
mod piano;

pub use acoustic::AcousticGuitar;
pub use bass::BassGuitar;
pub use electric::ElectricGuitar;
pub use guitar::{Guitar, Stringed};
pub use instrument::Instrument;
pub use piano::Piano;
