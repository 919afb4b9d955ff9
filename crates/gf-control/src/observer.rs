//! Frame observer trait for snapshot consumers.

use gf_engine::FrameSnapshot;

/// Callbacks invoked by [`BoardingController::run`][crate::BoardingController::run]
/// as frames are produced.
///
/// Both methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers receive each snapshot by
/// reference and must not assume it outlives the call — clone what you keep.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl FrameObserver for ProgressPrinter {
///     fn on_frame(&mut self, snap: &FrameSnapshot) {
///         println!("{} / {} arrived", snap.passengers_arrived, snap.total_passengers);
///     }
/// }
/// ```
pub trait FrameObserver {
    /// Called once per produced frame, including the completing frame.
    fn on_frame(&mut self, _snapshot: &FrameSnapshot) {}

    /// Called once when a run's snapshot first reports completion.
    fn on_run_end(&mut self, _snapshot: &FrameSnapshot) {}
}

/// A [`FrameObserver`] that does nothing.  Use when you need to drive a run
/// but don't care about per-frame output.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}
