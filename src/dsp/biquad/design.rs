use std::f64::consts::{PI, SQRT_2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::BiquadCoefficients;

/*
Closed-Form Biquad Design
=========================

Bilinear-transform designs from the Audio EQ Cookbook, in the normalized
form popularized by earlevel.com's biquad calculator. Every function has
the same signature so they can be swapped behind a single function pointer:

    (sample_rate Hz, frequency Hz, q, gain dB) -> BiquadCoefficients

Two intermediate values drive everything:

    K = tan(π · f / Fs)        prewarped corner
    V = 10^(|gain| / 20)       linear gain magnitude

| design     | uses q | uses gain | notes                              |
| ---------- | ------ | --------- | ---------------------------------- |
| lowpass    | yes    | no        | unity DC gain                      |
| highpass   | yes    | no        | unity Nyquist gain                 |
| bandpass   | yes    | no        | constant 0 dB peak                 |
| notch      | yes    | no        | zero at f                          |
| peak       | yes    | yes       | bell; branches on sign of gain     |
| low_shelf  | no     | yes       | fixed √2 slope; branches on gain   |
| high_shelf | no     | yes       | fixed √2 slope; branches on gain   |

Boost vs. cut
-------------
Peak and shelf designs swap numerator and denominator polynomials when the
gain is negative, instead of plugging a V < 1 into the boost formula. The
cut filter is then the exact reciprocal of the boost filter with the same
|gain|: cascading +6 dB and -6 dB returns the input.

All functions are pure. Only the `Biquad` built from their output carries
state.
*/

/// Signature shared by every design function.
pub type BiquadDesign = fn(sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> BiquadCoefficients;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiquadKind {
    LowPass,
    HighPass,
    BandPass,
    Notch,
    Peak,
    LowShelf,
    HighShelf,
}

impl BiquadKind {
    pub const ALL: [BiquadKind; 7] = [
        BiquadKind::LowPass,
        BiquadKind::HighPass,
        BiquadKind::BandPass,
        BiquadKind::Notch,
        BiquadKind::Peak,
        BiquadKind::LowShelf,
        BiquadKind::HighShelf,
    ];

    pub fn design_fn(self) -> BiquadDesign {
        match self {
            BiquadKind::LowPass => lowpass,
            BiquadKind::HighPass => highpass,
            BiquadKind::BandPass => bandpass,
            BiquadKind::Notch => notch,
            BiquadKind::Peak => peak,
            BiquadKind::LowShelf => low_shelf,
            BiquadKind::HighShelf => high_shelf,
        }
    }

    pub fn coefficients(self, sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> BiquadCoefficients {
        (self.design_fn())(sample_rate, frequency, q, gain_db)
    }

    /// Whether the gain argument affects the design.
    pub fn uses_gain(self) -> bool {
        matches!(self, BiquadKind::Peak | BiquadKind::LowShelf | BiquadKind::HighShelf)
    }
}

#[inline]
fn prewarp(sample_rate: f64, frequency: f64) -> f64 {
    (PI * frequency / sample_rate).tan()
}

#[inline]
fn linear_gain(gain_db: f64) -> f64 {
    10f64.powf(gain_db.abs() / 20.0)
}

pub fn lowpass(sample_rate: f64, frequency: f64, q: f64, _gain_db: f64) -> BiquadCoefficients {
    let k = prewarp(sample_rate, frequency);
    let kk = k * k;
    let norm = 1.0 / (1.0 + k / q + kk);
    let a0 = kk * norm;
    BiquadCoefficients {
        a0,
        a1: 2.0 * a0,
        a2: a0,
        b1: 2.0 * (kk - 1.0) * norm,
        b2: (1.0 - k / q + kk) * norm,
    }
}

pub fn highpass(sample_rate: f64, frequency: f64, q: f64, _gain_db: f64) -> BiquadCoefficients {
    let k = prewarp(sample_rate, frequency);
    let kk = k * k;
    let norm = 1.0 / (1.0 + k / q + kk);
    BiquadCoefficients {
        a0: norm,
        a1: -2.0 * norm,
        a2: norm,
        b1: 2.0 * (kk - 1.0) * norm,
        b2: (1.0 - k / q + kk) * norm,
    }
}

pub fn bandpass(sample_rate: f64, frequency: f64, q: f64, _gain_db: f64) -> BiquadCoefficients {
    let k = prewarp(sample_rate, frequency);
    let kk = k * k;
    let norm = 1.0 / (1.0 + k / q + kk);
    let a0 = k / q * norm;
    BiquadCoefficients {
        a0,
        a1: 0.0,
        a2: -a0,
        b1: 2.0 * (kk - 1.0) * norm,
        b2: (1.0 - k / q + kk) * norm,
    }
}

pub fn notch(sample_rate: f64, frequency: f64, q: f64, _gain_db: f64) -> BiquadCoefficients {
    let k = prewarp(sample_rate, frequency);
    let kk = k * k;
    let norm = 1.0 / (1.0 + k / q + kk);
    let a0 = (1.0 + kk) * norm;
    let a1 = 2.0 * (kk - 1.0) * norm;
    BiquadCoefficients {
        a0,
        a1,
        a2: a0,
        b1: a1,
        b2: (1.0 - k / q + kk) * norm,
    }
}

pub fn peak(sample_rate: f64, frequency: f64, q: f64, gain_db: f64) -> BiquadCoefficients {
    let k = prewarp(sample_rate, frequency);
    let kk = k * k;
    let v = linear_gain(gain_db);
    let mid = 2.0 * (kk - 1.0);

    if gain_db >= 0.0 {
        let norm = 1.0 / (1.0 + k / q + kk);
        BiquadCoefficients {
            a0: (1.0 + v / q * k + kk) * norm,
            a1: mid * norm,
            a2: (1.0 - v / q * k + kk) * norm,
            b1: mid * norm,
            b2: (1.0 - k / q + kk) * norm,
        }
    } else {
        let norm = 1.0 / (1.0 + v / q * k + kk);
        BiquadCoefficients {
            a0: (1.0 + k / q + kk) * norm,
            a1: mid * norm,
            a2: (1.0 - k / q + kk) * norm,
            b1: mid * norm,
            b2: (1.0 - v / q * k + kk) * norm,
        }
    }
}

pub fn low_shelf(sample_rate: f64, frequency: f64, _q: f64, gain_db: f64) -> BiquadCoefficients {
    let k = prewarp(sample_rate, frequency);
    let kk = k * k;
    let v = linear_gain(gain_db);
    let sqrt_2v = (2.0 * v).sqrt();

    if gain_db >= 0.0 {
        let norm = 1.0 / (1.0 + SQRT_2 * k + kk);
        BiquadCoefficients {
            a0: (1.0 + sqrt_2v * k + v * kk) * norm,
            a1: 2.0 * (v * kk - 1.0) * norm,
            a2: (1.0 - sqrt_2v * k + v * kk) * norm,
            b1: 2.0 * (kk - 1.0) * norm,
            b2: (1.0 - SQRT_2 * k + kk) * norm,
        }
    } else {
        let norm = 1.0 / (1.0 + sqrt_2v * k + v * kk);
        BiquadCoefficients {
            a0: (1.0 + SQRT_2 * k + kk) * norm,
            a1: 2.0 * (kk - 1.0) * norm,
            a2: (1.0 - SQRT_2 * k + kk) * norm,
            b1: 2.0 * (v * kk - 1.0) * norm,
            b2: (1.0 - sqrt_2v * k + v * kk) * norm,
        }
    }
}

pub fn high_shelf(sample_rate: f64, frequency: f64, _q: f64, gain_db: f64) -> BiquadCoefficients {
    let k = prewarp(sample_rate, frequency);
    let kk = k * k;
    let v = linear_gain(gain_db);
    let sqrt_2v = (2.0 * v).sqrt();

    if gain_db >= 0.0 {
        let norm = 1.0 / (1.0 + SQRT_2 * k + kk);
        BiquadCoefficients {
            a0: (v + sqrt_2v * k + kk) * norm,
            a1: 2.0 * (kk - v) * norm,
            a2: (v - sqrt_2v * k + kk) * norm,
            b1: 2.0 * (kk - 1.0) * norm,
            b2: (1.0 - SQRT_2 * k + kk) * norm,
        }
    } else {
        let norm = 1.0 / (v + sqrt_2v * k + kk);
        BiquadCoefficients {
            a0: (1.0 + SQRT_2 * k + kk) * norm,
            a1: 2.0 * (kk - 1.0) * norm,
            a2: (1.0 - SQRT_2 * k + kk) * norm,
            b1: 2.0 * (kk - v) * norm,
            b2: (v - sqrt_2v * k + kk) * norm,
        }
    }
}
