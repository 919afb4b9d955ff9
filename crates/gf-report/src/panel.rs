//! Status-panel mappings: congestion styling, clock formatting, arrival
//! fraction, heat-cell intensity buckets.
//!
//! Color values are the host dashboard's CSS constants, carried here so
//! any render surface (SVG, canvas, TUI) reproduces the same look without
//! re-deriving thresholds.

use gf_control::ControlState;
use gf_core::{DurationMs, whole_seconds};
use gf_engine::CongestionLevel;

// ── Congestion style ──────────────────────────────────────────────────────────

/// Label / color / meter-fill triple the status panel renders for a
/// congestion level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CongestionStyle {
    pub label: &'static str,
    /// Fill color of the congestion meter (CSS hex).
    pub color: &'static str,
    /// Meter fill as a fraction of full width.
    pub fill: f32,
}

/// The fixed style triple for each congestion level.
pub fn congestion_style(level: CongestionLevel) -> CongestionStyle {
    match level {
        CongestionLevel::Low => CongestionStyle {
            label: "Low",
            color: "#10b981",
            fill: 1.0 / 3.0,
        },
        CongestionLevel::Medium => CongestionStyle {
            label: "Medium",
            color: "#f59e0b",
            fill: 2.0 / 3.0,
        },
        CongestionLevel::High => CongestionStyle {
            label: "High",
            color: "#ef4444",
            fill: 1.0,
        },
    }
}

// ── Clock & arrivals ──────────────────────────────────────────────────────────

/// Format speed-scaled elapsed milliseconds as a zero-padded `MM:SS` clock.
///
/// Floors to whole seconds; negative or non-finite inputs render as `00:00`.
pub fn format_elapsed(elapsed_ms: DurationMs) -> String {
    let total = whole_seconds(elapsed_ms);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Fraction of passengers that have arrived, in `[0, 1]`.
///
/// A zero total yields `0.0` rather than NaN — the panel draws an empty
/// progress bar for a run with no passengers.
pub fn arrival_fraction(arrived: u32, total: u32) -> f32 {
    if total == 0 {
        0.0
    } else {
        arrived as f32 / total as f32
    }
}

/// The status-badge label for a controller state.
pub fn state_label(state: ControlState) -> &'static str {
    match state {
        ControlState::Idle => "Idle",
        ControlState::Running => "Boarding Active",
        ControlState::Complete => "Boarding Complete",
    }
}

// ── Heat-cell intensity ───────────────────────────────────────────────────────

/// Render bucket for one heatmap cell, derived from its particle count.
///
/// Cell *color* thresholds (≤ 2 low, ≤ 5 medium) are deliberately distinct
/// from the frame-level congestion thresholds (≥ 3 medium, ≥ 6 high): a
/// single cell turns amber one particle before it can tip the whole frame
/// to `Medium`, which is what makes building hot-spots visible early.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum HeatIntensity {
    /// Empty cell — rendered fully transparent.
    None,
    Low,
    Medium,
    High,
}

impl HeatIntensity {
    /// Largest count still rendered as `Low`.
    pub const LOW_MAX: u32 = 2;
    /// Largest count still rendered as `Medium`.
    pub const MEDIUM_MAX: u32 = 5;

    /// Fill color for this bucket (CSS rgba).
    pub fn color(self) -> &'static str {
        match self {
            HeatIntensity::None => "transparent",
            HeatIntensity::Low => "rgba(34, 197, 94, 0.15)",
            HeatIntensity::Medium => "rgba(234, 179, 8, 0.25)",
            HeatIntensity::High => "rgba(239, 68, 68, 0.35)",
        }
    }
}

/// Classify one heatmap cell count into its render bucket.
pub fn heat_intensity(count: u32) -> HeatIntensity {
    if count == 0 {
        HeatIntensity::None
    } else if count <= HeatIntensity::LOW_MAX {
        HeatIntensity::Low
    } else if count <= HeatIntensity::MEDIUM_MAX {
        HeatIntensity::Medium
    } else {
        HeatIntensity::High
    }
}
