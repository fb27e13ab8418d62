//! Benchmarks for the state-space filter at several orders.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_ctl::{dsp::StateSpaceFilter, Updater};

use crate::ramp;

const ORDERS: &[usize] = &[2, 4, 8];
const BLOCK: usize = 256;

/// Stable realization: scaled shift matrix with a small diagonal.
fn realization(order: usize) -> StateSpaceFilter {
    let a: Vec<Vec<f64>> = (0..order)
        .map(|i| {
            (0..order)
                .map(|j| {
                    if i == j {
                        0.1
                    } else if j + 1 == i {
                        0.5
                    } else {
                        0.0
                    }
                })
                .collect()
        })
        .collect();
    let b: Vec<f64> = (0..order).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();
    let c = vec![1.0 / order as f64; order];

    StateSpaceFilter::new(&a, &b, &c, 0.0).unwrap()
}

pub fn bench_state_space(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/state_space");
    let input = ramp(BLOCK);

    for &order in ORDERS {
        let mut filter = realization(order);
        group.bench_with_input(BenchmarkId::new("order", order), &order, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(filter.update(black_box(x)));
                }
            })
        });
    }

    group.finish();
}
