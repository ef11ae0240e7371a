//! Benchmarks for preparing music.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::NOTE_COUNTS;

pub fn bench_music(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/music");

    for &count in NOTE_COUNTS {
        let music = super::scale(count);

        group.bench_with_input(BenchmarkId::new("prepared", count), &count, |b, _| {
            b.iter(|| black_box(&music).prepared())
        });
    }

    group.finish();
}
