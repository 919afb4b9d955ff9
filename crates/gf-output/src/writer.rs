//! The `OutputWriter` trait implemented by backend writers.

use crate::{FrameRow, OutputResult};

/// Trait implemented by frame-log backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`RecordingObserver::take_error`](crate::RecordingObserver::take_error).
pub trait OutputWriter {
    /// Write one frame row.
    fn write_frame(&mut self, row: &FrameRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
