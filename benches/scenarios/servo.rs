//! Benchmarks for a servo loop: sensor conditioning → controller.
//!
//! The same chain is run three ways to show what dynamic dispatch costs:
//! a boxed `Cascade`, the slice helper over concrete stages, and a
//! statically dispatched `.through()` chain.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_ctl::{
    control::Pid,
    dsp::{Biquad, BiquadKind, FirFilter},
    graph::{cascade, Cascade, UpdaterExt},
    patch::{BiquadDescriptor, ChainDescriptor, StageDescriptor},
    Updater,
};

use crate::{ramp, BLOCK_SIZES};

const FS: f64 = 10_000.0;
const DT: f64 = 1.0 / FS;

fn pid() -> Pid {
    Pid::new(0.8, 20.0, 0.001, DT)
        .with_setpoint(0.5)
        .with_integral_limit(5.0)
}

pub fn bench_servo(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/servo");

    for &size in BLOCK_SIZES {
        let input = ramp(size);

        // === BOXED CASCADE ===
        // anti-alias → notch → smoothing FIR → PID
        let mut chain = Cascade::new()
            .with(Biquad::lowpass(FS, 1000.0, 0.7071, 0.0))
            .with(Biquad::notch(FS, 50.0, 5.0, 0.0))
            .with(FirFilter::new(&[0.25; 4]).unwrap())
            .with(pid());

        group.bench_with_input(BenchmarkId::new("cascade", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(chain.update(black_box(x)));
                }
            })
        });

        // === SLICE OF CONCRETE STAGES ===
        // Homogeneous biquad bank through the free function
        let mut bank = [
            Biquad::lowpass(FS, 1000.0, 0.7071, 0.0),
            Biquad::notch(FS, 50.0, 5.0, 0.0),
            Biquad::notch(FS, 150.0, 5.0, 0.0),
            Biquad::high_shelf(FS, 2000.0, 0.7071, -3.0),
        ];
        group.bench_with_input(BenchmarkId::new("biquad_bank", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(cascade(black_box(x), &mut bank));
                }
            })
        });

        // === STATIC CHAIN ===
        let mut through = Biquad::lowpass(FS, 1000.0, 0.7071, 0.0)
            .through(Biquad::notch(FS, 50.0, 5.0, 0.0))
            .through(FirFilter::new(&[0.25; 4]).unwrap())
            .through(pid());

        group.bench_with_input(BenchmarkId::new("through", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(through.update(black_box(x)));
                }
            })
        });

        // === DESCRIPTOR-BUILT ===
        // Error stage ahead of a low-passed reading, then the controller
        let mut built = ChainDescriptor::new("servo")
            .stage(StageDescriptor::Setpoint { target: 0.5 })
            .stage(StageDescriptor::Biquad(BiquadDescriptor::Design {
                kind: BiquadKind::LowPass,
                sample_rate: FS,
                frequency: 500.0,
                q: 0.7071,
                gain_db: 0.0,
            }))
            .stage(StageDescriptor::Pid {
                kp: 0.8,
                ki: 20.0,
                kd: 0.001,
                dt: DT,
                integral_limit: 5.0,
                setpoint: 0.0,
            })
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("descriptor", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(built.update(black_box(x)));
                }
            })
        });
    }

    group.finish();
}
