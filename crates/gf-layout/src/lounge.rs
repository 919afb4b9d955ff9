//! Waiting-area regions: lounges (particle origins) and the apron.

use gf_core::Rect;

/// A lounge region particles originate from.
///
/// Each particle picks a lounge uniformly at random, then a uniform point
/// inside its bounds, as its path start.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lounge {
    pub id: String,
    pub label: String,
    pub bounds: Rect,
}

impl Lounge {
    pub fn new(id: impl Into<String>, label: impl Into<String>, bounds: Rect) -> Self {
        Self { id: id.into(), label: label.into(), bounds }
    }
}

/// The apron area south of the terminal.
///
/// Purely decorative map furniture — no particle ever starts or ends here
/// and it is excluded from the heatmap grid.  Carried so renderers have the
/// full map in one place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Apron {
    pub label: String,
    pub bounds: Rect,
}

impl Apron {
    pub fn new(label: impl Into<String>, bounds: Rect) -> Self {
        Self { label: label.into(), bounds }
    }
}
