//! Benchmarks for the PID controller.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_ctl::{control::Pid, Updater};

use crate::{ramp, BLOCK_SIZES};

pub fn bench_pid(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/pid");

    for &size in BLOCK_SIZES {
        let input = ramp(size);

        let mut pid = Pid::new(1.2, 0.5, 0.01, 1e-3).with_setpoint(0.25);
        group.bench_with_input(BenchmarkId::new("pid", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(pid.update(black_box(x)));
                }
            })
        });

        // Clamp engaged on every update
        let mut clamped = Pid::new(1.2, 50.0, 0.0, 1e-3)
            .with_setpoint(10.0)
            .with_integral_limit(0.01);
        group.bench_with_input(BenchmarkId::new("clamped", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(clamped.update(black_box(x)));
                }
            })
        });
    }

    group.finish();
}
