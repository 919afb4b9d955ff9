//! Continuous millisecond time model.
//!
//! # Design
//!
//! The engine integrates against host-supplied wall-clock timestamps rather
//! than a quantized tick counter: frames arrive at whatever cadence the
//! display-refresh signal provides, and the speed multiplier rescales each
//! frame's delta independently.  Two quantities matter per frame:
//!
//!   elapsed = (now − start_time)      × multiplier
//!   delta   = (now − last_frame_time) × multiplier
//!
//! `f64` milliseconds keep sub-frame precision over any realistic session
//! (integer-exact up to 2^53 ms ≈ 285,000 years).

/// An absolute timestamp in milliseconds, in the host's frame-clock domain.
///
/// Only differences between timestamps are meaningful; the origin is
/// whatever the supplying clock chose (e.g. process start).
pub type TimestampMs = f64;

/// A span of milliseconds (already speed-scaled where applicable).
pub type DurationMs = f64;

/// Whole seconds contained in `ms`, floored and clamped to zero.
///
/// Used for `MM:SS` clock displays; negative or non-finite inputs (which a
/// misbehaving clock could produce) render as zero rather than panicking.
#[inline]
pub fn whole_seconds(ms: DurationMs) -> u64 {
    if ms.is_finite() && ms > 0.0 {
        (ms / 1_000.0).floor() as u64
    } else {
        0
    }
}
