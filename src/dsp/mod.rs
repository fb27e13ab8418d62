//! Low-level filter primitives.
//!
//! Every stage here is allocation-free after construction and realtime-safe:
//! one `update` call is a short, branch-light computation with cost that
//! depends only on the stage's size, never on the input. Stages are plain
//! values so they can live directly inside a caller's loop state.

/// Second-order IIR section and cookbook designs.
pub mod biquad;
/// Finite impulse response convolution.
pub mod fir;
/// Single-pole RC low-pass and high-pass filters.
pub mod one_pole;
/// `measurement - target` error stage.
pub mod setpoint;
/// Arbitrary-order SISO state-space filter.
pub mod state_space;

pub use biquad::{Biquad, BiquadCoefficients, BiquadKind};
pub use fir::FirFilter;
pub use one_pole::{HighPass, LowPass};
pub use setpoint::Setpoint;
pub use state_space::StateSpaceFilter;
