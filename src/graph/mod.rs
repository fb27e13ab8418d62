//! Composition of single-sample stages.
//!
//! The numeric stages in `dsp` and `control` know nothing about each other.
//! This module supplies the one capability they share, [`Updater`], and the
//! ways to chain them: a runtime [`Cascade`] of boxed stages and the
//! statically dispatched [`Through`] pair built with `.through()`.

/// Ordered runtime chains (`cascade`, `Cascade`).
pub mod cascade;
/// Fluent combinators (`.through()`, `.into_cascade()`).
pub mod extensions;
/// Core trait shared by all stages.
pub mod node;
/// Serial chaining of two stages (source → next).
pub mod through;

pub use cascade::{cascade, Cascade};
pub use extensions::UpdaterExt;
pub use node::{from_fn, FromFn, Updater};
pub use through::Through;
