//! `gf-control` — run-loop controller for the gateflow framework.
//!
//! The engine only answers `update(now)`; something still has to own *when*
//! frames happen and what the current run is.  That is this crate:
//!
//! - [`BoardingController`] — the `idle → running → complete` state machine
//!   wrapping one engine instance per run, with start/reset/speed/gate
//!   commands mirroring the host UI's controls;
//! - [`FrameClock`] — the display-refresh signal as a trait, with a
//!   deterministic [`FixedStepClock`] for tests and headless runs and a
//!   [`RealtimeClock`] that paces against the wall clock;
//! - [`FrameObserver`] — per-frame snapshot sink (renderers, recorders,
//!   status panels), with no-op defaults and a [`NoopObserver`].
//!
//! Everything is single-threaded and cooperative: one controller, one
//! active run, one `step` path mutating the engine.

pub mod clock;
pub mod controller;
pub mod observer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{FixedStepClock, FrameClock, RealtimeClock};
pub use controller::{BoardingController, ControlState, RunSettings};
pub use observer::{FrameObserver, NoopObserver};
