//! Offline response measurements.
//!
//! These helpers drive a stage with synthetic input and inspect what comes
//! out. They allocate and plan FFTs, so they belong in tests, tuning tools
//! and start-up checks, never inside a control loop.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::graph::node::Updater;

/// First `len` samples of the stage's response to a unit impulse.
pub fn impulse_response<U: Updater + ?Sized>(stage: &mut U, len: usize) -> Vec<f64> {
    (0..len)
        .map(|n| stage.update(if n == 0 { 1.0 } else { 0.0 }))
        .collect()
}

/// First `len` samples of the stage's response to a unit step.
pub fn step_response<U: Updater + ?Sized>(stage: &mut U, len: usize) -> Vec<f64> {
    (0..len).map(|_| stage.update(1.0)).collect()
}

/// Magnitude of the frequency response, estimated from a `len`-point impulse
/// response.
///
/// Returns bins `0..=len/2`. Bin `k` sits at `bin_frequency(k, len, fs)`.
/// For recursive stages, `len` must be long enough for the impulse response
/// to have decayed, or the estimate is smeared.
pub fn magnitude_response<U: Updater + ?Sized>(stage: &mut U, len: usize) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }

    let mut spectrum: Vec<Complex<f64>> = impulse_response(stage, len)
        .into_iter()
        .map(|re| Complex::new(re, 0.0))
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(len);
    fft.process(&mut spectrum);

    spectrum[..=len / 2].iter().map(|c| c.norm()).collect()
}

/// Center frequency of FFT bin `bin` for a `len`-point transform, in Hz.
pub fn bin_frequency(bin: usize, len: usize, sample_rate: f64) -> f64 {
    bin as f64 * sample_rate / len as f64
}
