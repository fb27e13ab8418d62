//! Second-order IIR section and its closed-form designs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::Updater;

/// Audio-EQ-cookbook coefficient synthesis.
pub mod design;

pub use design::{BiquadDesign, BiquadKind};

/*
Biquad (Second-Order Section)
=============================

Transfer function, normalized so the leading denominator term is 1:

            a0 + a1·z⁻¹ + a2·z⁻²
    H(z) = ----------------------
            1  + b1·z⁻¹ + b2·z⁻²

(Note the naming: `a` is the feedforward / numerator side, `b` the feedback
side. This matches the coefficient tables most filter calculators print.)

Direct Form II Transposed
-------------------------

    out = a0·in + z1
    z1  = a1·in + z2 - b1·out
    z2  = a2·in      - b2·out

            in ───┬──────────┬──────────┐
                  │          │          │
                 ×a0        ×a1        ×a2
                  │          │          │
                  ▼          ▼          ▼
    out ◄────── (+) ◄─z1─ (+) ◄─z2─── (+)
             │               ▲          ▲
             │              ×-b1       ×-b2
             └───────────────┴──────────┘

Two state variables, five multiplies, four adds. The transposed form keeps
intermediate sums close to the output magnitude, which minimizes round-off
growth for the high-Q, low-frequency sections typical of servo loops.
*/

/// Normalized coefficient set for a [`Biquad`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BiquadCoefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub b1: f64,
    pub b2: f64,
}

impl BiquadCoefficients {
    /// Passthrough: `out == in`.
    pub const IDENTITY: Self = Self {
        a0: 1.0,
        a1: 0.0,
        a2: 0.0,
        b1: 0.0,
        b2: 0.0,
    };

    /// Gain at DC, `H(1)`.
    pub fn dc_gain(&self) -> f64 {
        (self.a0 + self.a1 + self.a2) / (1.0 + self.b1 + self.b2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquad {
    coeffs: BiquadCoefficients,
    z1: f64,
    z2: f64,
}

impl Biquad {
    pub fn new(a0: f64, a1: f64, a2: f64, b1: f64, b2: f64) -> Self {
        Self::from_coefficients(BiquadCoefficients { a0, a1, a2, b1, b2 })
    }

    pub fn from_coefficients(coeffs: BiquadCoefficients) -> Self {
        Self {
            coeffs,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Design a filter of the given kind. See [`design`] for the formulas.
    pub fn design(kind: BiquadKind, sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> Self {
        Self::from_coefficients(kind.coefficients(sample_rate, frequency, q, gain_db))
    }

    pub fn lowpass(sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> Self {
        Self::from_coefficients(design::lowpass(sample_rate, frequency, q, gain_db))
    }

    pub fn highpass(sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> Self {
        Self::from_coefficients(design::highpass(sample_rate, frequency, q, gain_db))
    }

    pub fn bandpass(sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> Self {
        Self::from_coefficients(design::bandpass(sample_rate, frequency, q, gain_db))
    }

    pub fn notch(sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> Self {
        Self::from_coefficients(design::notch(sample_rate, frequency, q, gain_db))
    }

    pub fn peak(sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> Self {
        Self::from_coefficients(design::peak(sample_rate, frequency, q, gain_db))
    }

    pub fn low_shelf(sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> Self {
        Self::from_coefficients(design::low_shelf(sample_rate, frequency, q, gain_db))
    }

    pub fn high_shelf(sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> Self {
        Self::from_coefficients(design::high_shelf(sample_rate, frequency, q, gain_db))
    }

    pub fn coefficients(&self) -> BiquadCoefficients {
        self.coeffs
    }

    /// Clear the delay line. Coefficients are untouched.
    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }
}

impl From<BiquadCoefficients> for Biquad {
    fn from(coeffs: BiquadCoefficients) -> Self {
        Self::from_coefficients(coeffs)
    }
}

impl Updater for Biquad {
    #[inline]
    fn update(&mut self, input: f64) -> f64 {
        let c = &self.coeffs;
        let out = c.a0 * input + self.z1;
        self.z1 = c.a1 * input + self.z2 - c.b1 * out;
        self.z2 = c.a2 * input - c.b2 * out;
        out
    }
}
