//! ensemble - perform the demo band in the terminal
//!
//! Run with: cargo run
//! Set RUST_LOG=debug to watch the amplifier and each performance.

mod app;

use std::rc::Rc;

use app::Gig;
use ensemble::{amp::Amplifier, instruments::*, music::Music};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // One amp for both plugged-in guitars
    let amp = Amplifier::shared();

    Gig::new()
        .music(Music::new(["C", "G", "F"]))
        .instrument(Piano::new("Yamaha").with_pedals(true))
        .instrument(AcousticGuitar::new("Roland").with_string_gauge("light"))
        .instrument(ElectricGuitar::new("Gibson", Rc::clone(&amp)).with_string_gauge("medium"))
        .instrument(BassGuitar::new("Fender", amp).with_string_gauge("heavy"))
        .run()
}
