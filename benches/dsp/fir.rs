//! Benchmarks for FIR convolution at several tap counts.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_ctl::{dsp::FirFilter, Updater};

use crate::ramp;

const TAPS: &[usize] = &[8, 32, 128];
const BLOCK: usize = 256;

pub fn bench_fir(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fir");
    let input = ramp(BLOCK);

    for &taps in TAPS {
        // Moving average
        let coeffs = vec![1.0 / taps as f64; taps];
        let mut fir = FirFilter::new(&coeffs).unwrap();

        group.bench_with_input(BenchmarkId::new("taps", taps), &taps, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(fir.update(black_box(x)));
                }
            })
        });
    }

    group.finish();
}
