//! Running stages outside the caller's own loop.
//!
//! `pacing` keeps a hand-written loop on a fixed period. With the `rtrb`
//! feature, `control_loop` moves a stage onto its own thread and feeds it
//! through lock-free ring buffers.

#[cfg(feature = "rtrb")]
pub mod control_loop;
pub mod pacing;

#[cfg(feature = "rtrb")]
pub use control_loop::{channel, ControlLoop, LoopCommand, LoopHandle, LoopStatus};
pub use pacing::PhaseLock;
