//! Benchmarks for the biquad section and its designs.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_ctl::{
    dsp::{Biquad, BiquadKind},
    Updater,
};

use crate::{ramp, BLOCK_SIZES};

pub fn bench_biquad(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/biquad");

    for &size in BLOCK_SIZES {
        let input = ramp(size);

        let mut lowpass = Biquad::lowpass(48_000.0, 1000.0, 0.7071, 0.0);
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(lowpass.update(black_box(x)));
                }
            })
        });

        let mut peak = Biquad::peak(48_000.0, 1000.0, 2.0, -6.0);
        group.bench_with_input(BenchmarkId::new("peak", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(peak.update(black_box(x)));
                }
            })
        });
    }

    // Coefficient computation, e.g. retuning between loop runs
    group.bench_function("design/all", |b| {
        b.iter(|| {
            for kind in BiquadKind::ALL {
                black_box(kind.coefficients(
                    black_box(48_000.0),
                    black_box(1000.0),
                    black_box(0.7071),
                    black_box(3.0),
                ));
            }
        })
    });

    group.finish();
}
