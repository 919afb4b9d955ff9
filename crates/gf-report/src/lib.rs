//! `gf-report` — derived presentation mappings for gateflow snapshots.
//!
//! Everything in this crate is a pure, stateless function of engine or
//! controller output; the render layer treats these mappings as part of the
//! simulation's observable state, so they live here rather than in any UI.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`insights`] | Advisory text generation from aggregate congestion state  |
//! | [`panel`]    | Status-panel mappings: congestion style triple, `MM:SS`   |
//! |              | clock, arrival fraction, heat-cell intensity buckets      |
//!
//! Two distinct threshold sets live here and must not be conflated: the
//! congestion *level* classifier (peak cell ≥ 3 / ≥ 6, in `gf-engine`) and
//! the heat-cell *color* buckets (count ≤ 2 / ≤ 5, in [`panel`]).

pub mod insights;
pub mod panel;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use insights::generate_insights;
pub use panel::{
    CongestionStyle, HeatIntensity, arrival_fraction, congestion_style, format_elapsed,
    heat_intensity, state_label,
};
