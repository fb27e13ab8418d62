//! Feedback controllers.
//!
//! Like the filters in `dsp`, controllers are plain allocation-free values
//! driven one sample at a time through [`Updater`](crate::graph::Updater).

/// PID controller with a fixed time step and integral clamp.
pub mod pid;

pub use pid::Pid;
