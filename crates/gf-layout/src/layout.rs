//! Terminal layout: the gate/lounge tables and derived heatmap grid.

use gf_core::{Point, Rect};

use crate::error::{LayoutError, LayoutResult};
use crate::gate::{Gate, GateEdge};
use crate::grid::GridSpec;
use crate::lounge::{Apron, Lounge};

/// Default heatmap grid dimensions: 10 columns × 6 rows over the terminal.
pub const DEFAULT_GRID_COLS: u32 = 10;
pub const DEFAULT_GRID_ROWS: u32 = 6;

// ── TerminalLayout ────────────────────────────────────────────────────────────

/// Read-only terminal geometry shared by every simulation run.
///
/// All fields are `pub` for direct access by renderers; the engine reaches
/// for [`resolve_gate`](Self::resolve_gate), `lounges`, and `grid` only.
/// Construct via [`standard`](Self::standard) or [`TerminalLayoutBuilder`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalLayout {
    /// The main terminal building box.  Also the heatmap grid's extent.
    pub terminal: Rect,
    /// All boarding gates, in display order.  Never empty.
    pub gates: Vec<Gate>,
    /// Lounge regions particles originate from.
    pub lounges: Vec<Lounge>,
    /// Decorative apron area, if the map has one.
    pub apron: Option<Apron>,
    /// Heatmap binning geometry derived from `terminal`.
    pub grid: GridSpec,
}

impl TerminalLayout {
    /// The built-in terminal map: six top-edge gates (C1–D3), four
    /// right-edge gate pairs (D4/D5–D10/D11), three lounges, and a 10 × 6
    /// heat grid over the 800 × 380 terminal box.
    pub fn standard() -> Self {
        let terminal = Rect::new(200.0, 120.0, 800.0, 380.0);

        let top = |id: &str, label: &str, x: f32, cx: f32| {
            Gate::new(id, label, Rect::new(x, 60.0, 70.0, 60.0), Point::new(cx, 80.0), GateEdge::Top)
        };
        let right = |id: &str, y: f32, cy: f32| {
            Gate::new(id, id, Rect::new(1000.0, y, 70.0, 55.0), Point::new(1035.0, cy), GateEdge::Right)
        };

        let gates = vec![
            top("C1", "Gate C1", 250.0, 285.0),
            top("C2", "Gate C2", 370.0, 405.0),
            top("C4", "Gate C4", 490.0, 525.0),
            top("C6", "Gate C6", 610.0, 645.0),
            top("D1", "Gate D1", 730.0, 765.0),
            top("D3", "Gate D3", 850.0, 885.0),
            right("D4/D5", 140.0, 168.0),
            right("D6/D7", 225.0, 253.0),
            right("D8/D9", 340.0, 368.0),
            right("D10/D11", 430.0, 458.0),
        ];

        let lounges = vec![
            Lounge::new("lounge-domestic", "Domestic Lounge", Rect::new(230.0, 160.0, 300.0, 130.0)),
            Lounge::new("lounge-intl", "Int'l Lounge", Rect::new(580.0, 160.0, 200.0, 130.0)),
            Lounge::new("lounge-south", "Lounge Area", Rect::new(280.0, 350.0, 200.0, 100.0)),
        ];

        let apron = Some(Apron::new(
            "KIAL South Apron (U/C)",
            Rect::new(200.0, 540.0, 600.0, 160.0),
        ));

        Self {
            terminal,
            gates,
            lounges,
            apron,
            grid: GridSpec::over(terminal, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS),
        }
    }

    /// Look up a gate by id, falling back to the first gate when the id is
    /// unknown.
    ///
    /// The fallback is deliberate: gate selection comes from UI state that
    /// can go stale (a renamed gate, a deep link), and a boarding animation
    /// to the wrong gate beats a dead page.
    pub fn resolve_gate(&self, id: &str) -> &Gate {
        self.gates.iter().find(|g| g.id == id).unwrap_or(&self.gates[0])
    }

    /// `true` if `id` names a configured gate exactly.
    pub fn has_gate(&self, id: &str) -> bool {
        self.gates.iter().any(|g| g.id == id)
    }
}

impl Default for TerminalLayout {
    fn default() -> Self {
        Self::standard()
    }
}

// ── TerminalLayoutBuilder ─────────────────────────────────────────────────────

/// Construct a custom [`TerminalLayout`] incrementally, then call
/// [`build`](Self::build).
///
/// Used by tests and alternative terminal maps; the standard layout skips
/// the builder entirely.  `build()` validates that the result is something
/// the engine can run against (at least one gate, positive terminal extent,
/// non-zero grid dimensions) and derives the [`GridSpec`].
///
/// # Example
///
/// ```
/// use gf_core::{Point, Rect};
/// use gf_layout::{Gate, GateEdge, Lounge, TerminalLayoutBuilder};
///
/// let layout = TerminalLayoutBuilder::new(Rect::new(0.0, 0.0, 100.0, 60.0))
///     .gate(Gate::new("A1", "Gate A1", Rect::new(10.0, -20.0, 20.0, 20.0),
///                     Point::new(20.0, -10.0), GateEdge::Top))
///     .lounge(Lounge::new("l1", "Lounge", Rect::new(10.0, 10.0, 40.0, 30.0)))
///     .build()
///     .unwrap();
/// assert_eq!(layout.grid.cols, 10);
/// assert_eq!(layout.resolve_gate("A1").label, "Gate A1");
/// ```
pub struct TerminalLayoutBuilder {
    terminal: Rect,
    gates: Vec<Gate>,
    lounges: Vec<Lounge>,
    apron: Option<Apron>,
    grid_cols: u32,
    grid_rows: u32,
}

impl TerminalLayoutBuilder {
    /// Start a layout over the given terminal bounding box.
    pub fn new(terminal: Rect) -> Self {
        Self {
            terminal,
            gates: Vec::new(),
            lounges: Vec::new(),
            apron: None,
            grid_cols: DEFAULT_GRID_COLS,
            grid_rows: DEFAULT_GRID_ROWS,
        }
    }

    /// Add a boarding gate.  The first gate added becomes the soft-fallback
    /// target for unknown gate ids.
    pub fn gate(mut self, gate: Gate) -> Self {
        self.gates.push(gate);
        self
    }

    /// Add a lounge region.  A layout without lounges is legal — the engine
    /// falls back to the whole terminal box as the origin region.
    pub fn lounge(mut self, lounge: Lounge) -> Self {
        self.lounges.push(lounge);
        self
    }

    /// Set the decorative apron area.
    pub fn apron(mut self, apron: Apron) -> Self {
        self.apron = Some(apron);
        self
    }

    /// Override the heatmap grid dimensions (default 10 × 6).
    pub fn grid_dims(mut self, cols: u32, rows: u32) -> Self {
        self.grid_cols = cols;
        self.grid_rows = rows;
        self
    }

    /// Validate and produce the layout.
    pub fn build(self) -> LayoutResult<TerminalLayout> {
        if self.gates.is_empty() {
            return Err(LayoutError::NoGates);
        }
        if self.grid_cols == 0 || self.grid_rows == 0 {
            return Err(LayoutError::ZeroGridDims { cols: self.grid_cols, rows: self.grid_rows });
        }
        if self.terminal.width <= 0.0 || self.terminal.height <= 0.0 {
            return Err(LayoutError::EmptyTerminal {
                width: self.terminal.width,
                height: self.terminal.height,
            });
        }

        Ok(TerminalLayout {
            terminal: self.terminal,
            gates: self.gates,
            lounges: self.lounges,
            apron: self.apron,
            grid: GridSpec::over(self.terminal, self.grid_cols, self.grid_rows),
        })
    }
}
