//! Per-frame snapshot value objects.

use gf_core::ParticleId;

use crate::heatmap::DensityGrid;

// ── CongestionLevel ───────────────────────────────────────────────────────────

/// Aggregate congestion classification for one frame, derived from the
/// densest heatmap cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CongestionLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    /// Peak cell count at which a frame classifies as `Medium`.
    pub const MEDIUM_PEAK: u32 = 3;
    /// Peak cell count at which a frame classifies as `High`.
    pub const HIGH_PEAK: u32 = 6;

    /// Classify a frame from its densest cell count.
    ///
    /// Thresholds are fixed constants, deliberately distinct from the
    /// heat-cell *color* thresholds used by renderers.
    pub fn from_peak_density(peak: u32) -> Self {
        if peak >= Self::HIGH_PEAK {
            CongestionLevel::High
        } else if peak >= Self::MEDIUM_PEAK {
            CongestionLevel::Medium
        } else {
            CongestionLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CongestionLevel::Low => "low",
            CongestionLevel::Medium => "medium",
            CongestionLevel::High => "high",
        }
    }
}

impl std::fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ParticleView ──────────────────────────────────────────────────────────────

/// Renderable projection of one in-flight particle.
///
/// Only particles that have spawned and not yet arrived appear in a
/// snapshot; `id` is stable across frames so renderers can key animations.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleView {
    pub id: ParticleId,
    pub x: f32,
    pub y: f32,
    pub progress: f32,
    pub opacity: f32,
    pub size: f32,
}

// ── FrameSnapshot ─────────────────────────────────────────────────────────────

/// Immutable per-frame engine output, produced fresh by every
/// [`ParticleEngine::update`](crate::ParticleEngine::update) call.
///
/// Everything a consumer needs is here; none of it aliases engine state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSnapshot {
    /// All spawned, not-yet-arrived particles.
    pub particles: Vec<ParticleView>,
    /// Density grid recomputed from `particles` this frame.
    pub heatmap: DensityGrid,
    pub passengers_arrived: u32,
    pub total_passengers: u32,
    /// Speed-scaled milliseconds since `start`.
    pub elapsed_ms: f64,
    /// `true` exactly when every passenger has arrived; latched until the
    /// next `start` or `reset`.
    pub is_complete: bool,
    pub congestion: CongestionLevel,
}

impl FrameSnapshot {
    /// Number of particles currently in flight.
    #[inline]
    pub fn visible_count(&self) -> usize {
        self.particles.len()
    }
}
