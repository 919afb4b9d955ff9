//! Plain data row types written by output backends.

use gf_engine::{CongestionLevel, FrameSnapshot};

/// One recorded frame of aggregate run state.
///
/// Deliberately aggregate-only: per-particle positions change every frame
/// and would swamp a log that exists to answer "how did the run go", not
/// "where was particle 37".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow {
    /// 1-based frame index within the run.
    pub frame: u64,
    pub elapsed_ms: f64,
    /// Particles in flight this frame.
    pub visible: u32,
    pub arrived: u32,
    pub total: u32,
    /// Densest heatmap cell count this frame.
    pub peak_density: u32,
    pub congestion: CongestionLevel,
    pub complete: bool,
}

impl FrameRow {
    /// Project a snapshot down to its loggable aggregates.
    pub fn from_snapshot(frame: u64, snapshot: &FrameSnapshot) -> Self {
        Self {
            frame,
            elapsed_ms: snapshot.elapsed_ms,
            visible: snapshot.visible_count() as u32,
            arrived: snapshot.passengers_arrived,
            total: snapshot.total_passengers,
            peak_density: snapshot.heatmap.max_count(),
            congestion: snapshot.congestion,
            complete: snapshot.is_complete,
        }
    }
}
