//! Run configuration for the particle engine.

use gf_core::entropy_seed;

/// Default passenger count for a boarding call.
pub const DEFAULT_TOTAL_PASSENGERS: u32 = 140;

/// Default wall-clock length of a full run at 1× speed, in milliseconds.
pub const DEFAULT_SIMULATION_DURATION_MS: f64 = 18_000.0;

/// Immutable per-run configuration, supplied at engine construction.
///
/// Values are accepted as-is — there is no validation.  A zero passenger
/// count completes on the first frame, a zero duration makes every particle
/// arrive instantly, and a zero multiplier freezes the clock; none of these
/// are errors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Target gate id.  Unknown ids resolve to the layout's first gate.
    pub gate_id: String,
    /// How many particles to simulate.
    pub total_passengers: u32,
    /// Nominal run length in milliseconds at 1× speed.  Spawn offsets cover
    /// the first 55 % of this span; a particle's path takes 45 % of it at
    /// walking speed 1.0.
    pub simulation_duration_ms: f64,
    /// Initial time-scale factor.  Changeable mid-run via
    /// [`ParticleEngine::set_speed_multiplier`](crate::ParticleEngine::set_speed_multiplier).
    pub speed_multiplier: f64,
    /// Trajectory RNG seed.  [`EngineConfig::new`] draws a fresh one from
    /// entropy; pin it to replay a run exactly.
    pub seed: u64,
}

impl EngineConfig {
    /// Configuration with the standard boarding-call defaults (140 passengers, 18 s duration,
    /// 1× speed) and an entropy-drawn seed.
    pub fn new(gate_id: impl Into<String>) -> Self {
        Self {
            gate_id: gate_id.into(),
            total_passengers: DEFAULT_TOTAL_PASSENGERS,
            simulation_duration_ms: DEFAULT_SIMULATION_DURATION_MS,
            speed_multiplier: 1.0,
            seed: entropy_seed(),
        }
    }
}
