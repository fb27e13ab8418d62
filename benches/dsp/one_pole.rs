//! Benchmarks for single-pole RC filters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_ctl::{
    dsp::{HighPass, LowPass},
    Updater,
};

use crate::{ramp, BLOCK_SIZES};

pub fn bench_one_pole(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/one_pole");

    for &size in BLOCK_SIZES {
        let input = ramp(size);

        let mut lpf = LowPass::new(50.0, 1e-3);
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(lpf.update(black_box(x)));
                }
            })
        });

        let mut hpf = HighPass::new(50.0, 1e-3);
        group.bench_with_input(BenchmarkId::new("highpass", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(hpf.update(black_box(x)));
                }
            })
        });
    }

    group.finish();
}
