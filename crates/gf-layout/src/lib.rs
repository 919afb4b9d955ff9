//! `gf-layout` — static terminal geometry for the gateflow framework.
//!
//! The simulation engine treats terminal geometry as read-only lookup data:
//! a table of boarding gates, a set of lounge regions particles originate
//! from, the terminal bounding box, and the heatmap grid derived from it.
//! None of this is engine state — a layout is built once (or taken from
//! [`TerminalLayout::standard`]) and shared by every run.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`gate`]   | `Gate`, `GateEdge`                                  |
//! | [`lounge`] | `Lounge`, `Apron`                                   |
//! | [`grid`]   | `GridSpec` — heatmap binning geometry               |
//! | [`layout`] | `TerminalLayout`, `TerminalLayoutBuilder`           |
//! | [`error`]  | `LayoutError`, `LayoutResult`                       |

pub mod error;
pub mod gate;
pub mod grid;
pub mod layout;
pub mod lounge;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LayoutError, LayoutResult};
pub use gate::{Gate, GateEdge};
pub use grid::GridSpec;
pub use layout::{TerminalLayout, TerminalLayoutBuilder};
pub use lounge::{Apron, Lounge};
