//! Benchmarks for complete control chains.

mod servo;

pub use servo::bench_servo;
