//! `RecordingObserver<W>` — bridges `FrameObserver` to an `OutputWriter`.

use gf_control::FrameObserver;
use gf_engine::FrameSnapshot;

use crate::OutputError;
use crate::row::FrameRow;
use crate::writer::OutputWriter;

/// A [`FrameObserver`] that records every frame's aggregates to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After the run loop returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RecordingObserver<W: OutputWriter> {
    writer: W,
    frames_written: u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RecordingObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frames_written: 0,
            last_error: None,
        }
    }

    /// Number of frame rows handed to the writer so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Take the stored write error (if any) after the run loop returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FrameObserver for RecordingObserver<W> {
    fn on_frame(&mut self, snapshot: &FrameSnapshot) {
        self.frames_written += 1;
        let row = FrameRow::from_snapshot(self.frames_written, snapshot);
        let result = self.writer.write_frame(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _snapshot: &FrameSnapshot) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
