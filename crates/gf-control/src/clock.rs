//! Frame clocks — the display-refresh signal as a trait.

use std::time::{Duration, Instant};

use gf_core::TimestampMs;

/// Source of frame timestamps for [`BoardingController::run`][crate::BoardingController::run].
///
/// Each call yields the timestamp of the next frame, blocking (or not) as
/// the implementation sees fit.  Timestamps must be non-decreasing — the
/// engine interprets differences between consecutive values as frame deltas.
pub trait FrameClock {
    fn next_frame(&mut self) -> TimestampMs;
}

// ── FixedStepClock ────────────────────────────────────────────────────────────

/// Deterministic clock advancing a fixed step per frame, starting one step
/// after its origin.  The workhorse for tests and headless batch runs —
/// a run is then a pure function of `(seed, step)`.
pub struct FixedStepClock {
    now_ms: f64,
    step_ms: f64,
}

impl FixedStepClock {
    /// Start at origin 0; the first frame lands at `step_ms`.
    pub fn new(step_ms: f64) -> Self {
        Self::starting_at(0.0, step_ms)
    }

    /// Start at an arbitrary origin (e.g. to line up with a `start(now)`
    /// anchor other than zero).
    pub fn starting_at(origin_ms: f64, step_ms: f64) -> Self {
        Self { now_ms: origin_ms, step_ms }
    }
}

impl FrameClock for FixedStepClock {
    fn next_frame(&mut self) -> TimestampMs {
        self.now_ms += self.step_ms;
        self.now_ms
    }
}

// ── RealtimeClock ─────────────────────────────────────────────────────────────

/// Paces frames against the wall clock at a target rate, sleeping between
/// frames.  Timestamps are milliseconds since the clock was created.
///
/// Stands in for the host's display-refresh callback when the simulation
/// runs outside a compositor (demos, soak runs).
pub struct RealtimeClock {
    origin: Instant,
    frame_interval: Duration,
}

impl RealtimeClock {
    /// A clock targeting `fps` frames per second.  `fps = 0` disables the
    /// sleep entirely (frames as fast as the loop can spin).
    pub fn new(fps: u32) -> Self {
        let frame_interval = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / fps as f64)
        };
        Self { origin: Instant::now(), frame_interval }
    }
}

impl FrameClock for RealtimeClock {
    fn next_frame(&mut self) -> TimestampMs {
        if !self.frame_interval.is_zero() {
            std::thread::sleep(self.frame_interval);
        }
        self.origin.elapsed().as_secs_f64() * 1_000.0
    }
}
