use crate::{error::ConfigError, graph::node::Updater};

/*
State-Space Filter
==================

Any linear time-invariant SISO filter of order n can be written as

    x[k+1] = A·x[k] + B·u[k]
    y[k]   = C·x[k] + D·u[k]

where x is the n-element state, u the input sample and y the output sample.
A is n×n, B and C have n elements, D is a scalar.

Vocabulary
----------

  state       The filter's memory. For a cascade of integrators it is the
              integrator outputs; for a discretized plant it is whatever
              the realization chose.

  realization One particular (A, B, C, D). Many realizations share a
              transfer function; they differ in numerical behavior.

  order       n, the length of x.


Update Order
------------

    1. scratch = A·x + B·u       next state
    2. y       = C·x + D·u       output from the PRE-update state
    3. swap(x, scratch)

The output is taken before the transition, so D is the only direct
feed-through path. This matches the usual direct-form realization.


Double Buffering
----------------

The next state needs every element of the current state, so it cannot be
computed in place. Instead of allocating a fresh vector per sample, two
buffers of length n are created once and swap roles every call:

    call k:    x = buf0   scratch = buf1   →  write buf1, swap
    call k+1:  x = buf1   scratch = buf0   →  write buf0, swap

`std::mem::swap` on two `Vec`s exchanges three words; no element is copied
and nothing is allocated after construction.

A is stored row-major in a single flat vector so each row of the
matrix-vector product is a contiguous slice.
*/

#[derive(Debug, Clone, PartialEq)]
pub struct StateSpaceFilter {
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: f64,
    x: Vec<f64>,
    scratch: Vec<f64>,
}

impl StateSpaceFilter {
    /// Build a filter from its realization. `a` is given row by row.
    ///
    /// Rejects an empty state and any dimension mismatch between `a`, `b`
    /// and `c`.
    pub fn new<R: AsRef<[f64]>>(a: &[R], b: &[f64], c: &[f64], d: f64) -> Result<Self, ConfigError> {
        let n = a.len();
        if n == 0 {
            return Err(ConfigError::EmptyState);
        }
        check_len("B", n, b.len())?;
        check_len("C", n, c.len())?;

        let mut flat = Vec::with_capacity(n * n);
        for row in a {
            let row = row.as_ref();
            check_len("row of A", n, row.len())?;
            flat.extend_from_slice(row);
        }

        Ok(Self {
            a: flat,
            b: b.to_vec(),
            c: c.to_vec(),
            d,
            x: vec![0.0; n],
            scratch: vec![0.0; n],
        })
    }

    /// Start from `x0` instead of the zero state.
    pub fn with_initial_state(mut self, x0: &[f64]) -> Result<Self, ConfigError> {
        check_len("initial state", self.order(), x0.len())?;
        self.x.copy_from_slice(x0);
        Ok(self)
    }

    /// Number of states, n.
    pub fn order(&self) -> usize {
        self.x.len()
    }

    pub fn state(&self) -> &[f64] {
        &self.x
    }

    /// Zero the state (and scratch) in place. A, B, C, D are kept.
    pub fn reset(&mut self) {
        self.x.fill(0.0);
        self.scratch.fill(0.0);
    }
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), ConfigError> {
    if expected == found {
        Ok(())
    } else {
        Err(ConfigError::DimensionMismatch { what, expected, found })
    }
}

impl Updater for StateSpaceFilter {
    fn update(&mut self, input: f64) -> f64 {
        let n = self.x.len();

        for ((next, row), b) in self.scratch.iter_mut().zip(self.a.chunks_exact(n)).zip(&self.b) {
            *next = dot(row, &self.x) + b * input;
        }

        let output = dot(&self.x, &self.c) + self.d * input;

        std::mem::swap(&mut self.x, &mut self.scratch);
        output
    }
}

#[inline]
fn dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs).map(|(l, r)| l * r).sum()
}
