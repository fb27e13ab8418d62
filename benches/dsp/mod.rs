//! Benchmarks for single stages.

mod biquad;
mod fir;
mod one_pole;
mod pid;
mod state_space;

pub use biquad::bench_biquad;
pub use fir::bench_fir;
pub use one_pole::bench_one_pole;
pub use pid::bench_pid;
pub use state_space::bench_state_space;
