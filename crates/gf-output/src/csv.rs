//! CSV output backend.
//!
//! Creates one file in the configured output directory:
//! - `frame_log.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FrameRow, OutputResult};

/// Writes one frame log to a CSV file.
pub struct CsvWriter {
    frames: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `frame_log.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("frame_log.csv"))?;
        frames.write_record([
            "frame",
            "elapsed_ms",
            "visible",
            "arrived",
            "total",
            "peak_density",
            "congestion",
            "complete",
        ])?;

        Ok(Self { frames, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frame(&mut self, row: &FrameRow) -> OutputResult<()> {
        self.frames.write_record(&[
            row.frame.to_string(),
            format!("{:.3}", row.elapsed_ms),
            row.visible.to_string(),
            row.arrived.to_string(),
            row.total.to_string(),
            row.peak_density.to_string(),
            row.congestion.as_str().to_owned(),
            (row.complete as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        Ok(())
    }
}
