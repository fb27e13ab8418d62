//! Single-sample filters and controllers for realtime control loops.
//!
//! Every stage implements [`Updater`]: one value in, one value out, no
//! allocation and no failure on the hot path. Stages compose with
//! [`cascade`] / [`Cascade`] or `.through()`.
//!
//! ```
//! use saavy_ctl::{control::Pid, dsp::LowPass, Updater};
//!
//! let mut plant = LowPass::new(200.0, 1e-3);
//! let mut pid = Pid::new(1.0, 0.0, 0.0, 1e-3).with_setpoint(100.0);
//!
//! let mut measurement = 0.0;
//! for _ in 0..50 {
//!     let drive = pid.update(measurement);
//!     measurement = plant.update(drive);
//! }
//! ```

pub mod analysis; // Impulse, step and frequency response
pub mod control; // Feedback controllers
pub mod dsp; // Filter primitives
pub mod error;
pub mod graph; // Updater trait and chaining
pub mod patch; // Declarative stage descriptors
pub mod runtime; // Loop pacing and the threaded loop (rtrb)

pub use error::ConfigError;
pub use graph::{cascade, Cascade, Updater};
