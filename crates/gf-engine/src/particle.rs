//! Per-particle trajectory state.
//!
//! Particles are owned exclusively by the engine and never exposed through
//! the public API; renderers see [`ParticleView`](crate::ParticleView)
//! projections in snapshots.

use gf_core::{ParticleId, Point, Rect, SimRng, quad_bezier};

/// Destination jitter around the gate center, in display units.
/// Keeps simultaneous arrivals from stacking on one pixel.
const TARGET_JITTER_X: f32 = 15.0;
const TARGET_JITTER_Y: f32 = 10.0;

/// Bézier control-point offset from the path midpoint.  Lateral spread is
/// wider than vertical so paths fan out across the concourse.
const CONTROL_JITTER_X: f32 = 80.0;
const CONTROL_JITTER_Y: f32 = 40.0;

/// Walking-speed multiplier range; fixed per particle at creation.
const SPEED_MIN: f32 = 0.6;
const SPEED_MAX: f32 = 1.4;

/// Visual radius range in display units.
const SIZE_MIN: f32 = 2.0;
const SIZE_SPREAD: f32 = 2.5;

/// Fraction of progress over which opacity ramps at each end of the path.
const FADE_SPAN: f32 = 0.08;

/// One passenger particle: a fixed Bézier trajectory plus advancement state.
#[derive(Clone, Debug)]
pub(crate) struct Particle {
    pub id: ParticleId,
    pub start: Point,
    pub control: Point,
    pub target: Point,
    /// Path completion in `[0, 1]`; 0 = not yet visible, 1 = arrived.
    pub progress: f32,
    /// Per-particle walking-speed factor in `[0.6, 1.4)`.
    pub speed: f32,
    /// Offset from run start (scaled ms) at which the particle begins moving.
    pub spawn_ms: f64,
    /// Visual radius, cosmetic only.
    pub size: f32,
    /// Terminal flag: once set, the particle is excluded from position and
    /// heatmap computation and counted exactly once toward arrivals.
    pub arrived: bool,
}

impl Particle {
    /// Draw a fresh trajectory from `rng`.
    ///
    /// `origins` must be non-empty (the engine guarantees this by falling
    /// back to the terminal box); `spawn_window_ms` is the staggering span —
    /// zero collapses all spawns to run start.
    pub(crate) fn generate(
        id: ParticleId,
        gate_center: Point,
        origins: &[Rect],
        spawn_window_ms: f64,
        rng: &mut SimRng,
    ) -> Self {
        let region = rng.choose(origins).copied().unwrap_or_default();
        let start = region.sample(rng);

        let target = Point::new(
            gate_center.x + rng.gen_range(-TARGET_JITTER_X..TARGET_JITTER_X),
            gate_center.y + rng.gen_range(-TARGET_JITTER_Y..TARGET_JITTER_Y),
        );

        // Offset the control point from the straight-line midpoint so paths
        // curve organically instead of converging in a straight fan.
        let mid = start.midpoint(target);
        let control = Point::new(
            mid.x + rng.gen_range(-CONTROL_JITTER_X..CONTROL_JITTER_X),
            mid.y + rng.gen_range(-CONTROL_JITTER_Y..CONTROL_JITTER_Y),
        );

        Self {
            id,
            start,
            control,
            target,
            progress: 0.0,
            speed: rng.gen_range(SPEED_MIN..SPEED_MAX),
            spawn_ms: rng.random::<f64>() * spawn_window_ms,
            size: SIZE_MIN + rng.random::<f32>() * SIZE_SPREAD,
            arrived: false,
        }
    }

    /// Current position: the trajectory evaluated at `t = progress`.
    #[inline]
    pub(crate) fn position(&self) -> Point {
        quad_bezier(self.start, self.control, self.target, self.progress)
    }

    /// Opacity at the current progress: linear ramp from 0→1 over the first
    /// 8 % of the path and 1→0 over the last 8 %, avoiding visual popping at
    /// the endpoints.
    pub(crate) fn opacity(&self) -> f32 {
        let t = self.progress;
        if t < FADE_SPAN {
            t / FADE_SPAN
        } else if t > 1.0 - FADE_SPAN {
            (1.0 - t) / FADE_SPAN
        } else {
            1.0
        }
    }
}
