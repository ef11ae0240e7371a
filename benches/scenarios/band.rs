//! Benchmarks for complete band performances.
//!
//! Uses the four-piece line-up from the binary: piano, acoustic, and an
//! electric/bass pair sharing one amplifier.

use std::hint::black_box;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion};
use ensemble::{amp::Amplifier, band::Band, instruments::*};

use crate::NOTE_COUNTS;

pub fn bench_band(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/band");

    let amp = Amplifier::shared();
    let band = Band::new()
        .with(Piano::new("Yamaha").with_pedals(true))
        .with(AcousticGuitar::new("Roland"))
        .with(ElectricGuitar::new("Gibson", Rc::clone(&amp)))
        .with(BassGuitar::new("Fender", amp));

    for &count in NOTE_COUNTS {
        let music = super::scale(count);
        let mut recording: Vec<String> = Vec::with_capacity(band.len() * 2);

        group.bench_with_input(BenchmarkId::new("perform", count), &count, |b, _| {
            b.iter(|| {
                recording.clear();
                band.perform(black_box(&music), &mut recording)
            })
        });
    }

    group.finish();
}
