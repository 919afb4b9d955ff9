//! Boarding gate geometry.

use gf_core::{Point, Rect};

/// Which edge of the terminal outline a gate box sits on.
///
/// Render-only metadata: top-edge gates draw above the terminal, right-edge
/// gates beside it.  The engine itself only cares about [`Gate::center`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GateEdge {
    Top,
    Right,
}

impl GateEdge {
    pub fn as_str(self) -> &'static str {
        match self {
            GateEdge::Top => "top",
            GateEdge::Right => "right",
        }
    }
}

impl std::fmt::Display for GateEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One boarding gate: identity, display label, and map geometry.
///
/// `center` is stored explicitly rather than derived from `bounds` — the
/// layout tables round right-edge gate centers to whole display units and
/// particle destinations must land on those exact coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gate {
    /// Stable identifier used in selection commands (e.g. `"C4"`, `"D4/D5"`).
    pub id: String,
    /// Human-readable label (e.g. `"Gate C4"`).
    pub label: String,
    /// The gate box on the terminal map.
    pub bounds: Rect,
    /// Destination point particles converge on (before per-particle jitter).
    pub center: Point,
    /// Edge placement on the terminal outline.
    pub edge: GateEdge,
}

impl Gate {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        bounds: Rect,
        center: Point,
        edge: GateEdge,
    ) -> Self {
        Self { id: id.into(), label: label.into(), bounds, center, edge }
    }
}
