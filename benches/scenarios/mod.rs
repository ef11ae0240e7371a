//! Real-world scenario benchmarks.
//!
//! These model the demo band from the binary at growing music lengths.

mod band;
mod music;

pub use band::bench_band;
pub use music::bench_music;

/// A run of `count` notes cycling through one octave.
pub fn scale(count: usize) -> ensemble::music::Music {
    const OCTAVE: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];
    OCTAVE.iter().cycle().take(count).copied().collect()
}
