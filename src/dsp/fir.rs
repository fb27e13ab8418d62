use crate::{error::ConfigError, graph::node::Updater};

/*
FIR Filter
==========

A finite impulse response filter is a weighted sum of the last N inputs:

    y[n] = h[0]·x[n] + h[1]·x[n-1] + ... + h[N-1]·x[n-N+1]

No feedback, so it is unconditionally stable and its impulse response is the
tap vector itself.

The Usual Way (and why we don't)
--------------------------------

Keep a circular history and walk it BACKWARD from the newest sample:

    for i in 0..N {
        acc += h[i] * history[(pos + N - i) % N];
    }

Every iteration pays a modulo, and the history is read in reverse with a
wrap in the middle. Neither helps the prefetcher or the vectorizer.

Doubled Reversed Taps
---------------------

Store the taps reversed, twice, back to back (length 2N):

    h = [h0, h1, h2, h3]
    coeffs = [h3, h2, h1, h0, h3, h2, h1, h0]

After writing the newest sample at `j` and advancing `j`, the slice

    coeffs[N - j .. 2N - j]

lines up with the history buffer read FORWARD from index 0. Example, N = 4,
newest sample just written at index 1 (so j = 2):

    history:   x[n-1]  x[n]    x[n-3]  x[n-2]
    window:    h1      h0      h3      h2          (coeffs[2..6])

Both slices are contiguous and read front to back, so the inner loop is a
plain dot product: no modulo, no branch, no reverse walk. The cost is N extra
coefficients of memory.
*/

#[derive(Debug, Clone, PartialEq)]
pub struct FirFilter {
    /// Reversed taps, stored twice. `coeffs.len() == 2 * history.len()`.
    coeffs: Vec<f64>,
    history: Vec<f64>,
    /// Next write index, in `[0, N)`.
    pos: usize,
}

impl FirFilter {
    pub fn new(taps: &[f64]) -> Result<Self, ConfigError> {
        if taps.is_empty() {
            return Err(ConfigError::EmptyTaps);
        }

        let mut coeffs = Vec::with_capacity(2 * taps.len());
        coeffs.extend(taps.iter().rev());
        coeffs.extend(taps.iter().rev());

        Ok(Self {
            coeffs,
            history: vec![0.0; taps.len()],
            pos: 0,
        })
    }

    /// Number of taps, N.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Taps in their original order, h[0] first.
    pub fn taps(&self) -> impl Iterator<Item = f64> + '_ {
        self.coeffs[..self.len()].iter().rev().copied()
    }

    /// Zero the sample history. Taps are untouched.
    pub fn reset(&mut self) {
        self.history.fill(0.0);
        self.pos = 0;
    }
}

impl Updater for FirFilter {
    fn update(&mut self, input: f64) -> f64 {
        let n = self.history.len();
        self.history[self.pos] = input;
        self.pos += 1;
        if self.pos == n {
            self.pos = 0;
        }

        let offset = n - self.pos;
        self.history
            .iter()
            .zip(&self.coeffs[offset..offset + n])
            .map(|(x, h)| x * h)
            .sum()
    }
}
