//! `gf-output` — frame-log recording for gateflow runs.
//!
//! The dashboard itself keeps nothing; this crate exists for the headless
//! side of the framework — batch runs, soak tests, demo binaries — where a
//! run's frame-by-frame aggregates are worth keeping on disk for offline
//! inspection.
//!
//! One backend is provided:
//!
//! | Backend             | File created    |
//! |---------------------|-----------------|
//! | [`CsvWriter`]       | `frame_log.csv` |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`RecordingObserver`], which implements `gf_control::FrameObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gf_output::{CsvWriter, RecordingObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RecordingObserver::new(writer);
//! controller.run(&mut clock, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use row::FrameRow;
pub use writer::OutputWriter;
