//! The `BoardingController` state machine and run loop.

use gf_core::{TimestampMs, entropy_seed};
use gf_engine::{CongestionLevel, DensityGrid, EngineConfig, FrameSnapshot, ParticleEngine};
use gf_layout::TerminalLayout;

use crate::clock::FrameClock;
use crate::observer::FrameObserver;

// ── ControlState ──────────────────────────────────────────────────────────────

/// Controller lifecycle state.
///
/// ```text
/// idle ──start──▶ running ──final arrival──▶ complete
///   ▲                │                          │
///   └──── reset ─────┴───── reset / gate change ┘
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ControlState {
    #[default]
    Idle,
    Running,
    Complete,
}

impl ControlState {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlState::Idle => "idle",
            ControlState::Running => "running",
            ControlState::Complete => "complete",
        }
    }
}

impl std::fmt::Display for ControlState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RunSettings ───────────────────────────────────────────────────────────────

/// Per-run parameters the controller applies when building an engine.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSettings {
    pub total_passengers: u32,
    pub simulation_duration_ms: f64,
    /// `None` draws a fresh entropy seed per `start` (the interactive
    /// default); `Some` makes every run identical — useful for tests and
    /// replays.
    pub seed: Option<u64>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            total_passengers: gf_engine::DEFAULT_TOTAL_PASSENGERS,
            simulation_duration_ms: gf_engine::DEFAULT_SIMULATION_DURATION_MS,
            seed: None,
        }
    }
}

// ── BoardingController ────────────────────────────────────────────────────────

/// Owns the run loop around one [`ParticleEngine`] at a time.
///
/// Exactly one run is active per controller; starting a new one requires
/// the current run to finish or be reset first (`start` while running is
/// ignored).  `reset` discards the engine outright, so any loop still
/// polling [`step`](Self::step) sees idle snapshots and
/// [`run`](Self::run) terminates — there is no stale callback to leak.
pub struct BoardingController {
    layout: TerminalLayout,
    settings: RunSettings,
    selected_gate: String,
    speed_multiplier: f64,
    engine: Option<ParticleEngine>,
    state: ControlState,
}

impl BoardingController {
    /// A controller over `layout` with default settings; the initially
    /// selected gate is the layout's first.
    pub fn new(layout: TerminalLayout) -> Self {
        Self::with_settings(layout, RunSettings::default())
    }

    pub fn with_settings(layout: TerminalLayout, settings: RunSettings) -> Self {
        let selected_gate = layout.gates[0].id.clone();
        Self {
            layout,
            settings,
            selected_gate,
            speed_multiplier: 1.0,
            engine: None,
            state: ControlState::Idle,
        }
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Begin a run at timestamp `now`.  Idempotent while running: a second
    /// `start` neither re-anchors the clock nor regenerates trajectories.
    /// Starting from `Complete` begins a fresh run.
    pub fn start(&mut self, now: TimestampMs) {
        if self.state == ControlState::Running {
            return;
        }
        let config = EngineConfig {
            gate_id: self.selected_gate.clone(),
            total_passengers: self.settings.total_passengers,
            simulation_duration_ms: self.settings.simulation_duration_ms,
            speed_multiplier: self.speed_multiplier,
            seed: self.settings.seed.unwrap_or_else(entropy_seed),
        };
        let mut engine = ParticleEngine::new(config, &self.layout);
        engine.start(now);
        self.engine = Some(engine);
        self.state = ControlState::Running;
    }

    /// Discard the engine and any pending frame; the controller returns to
    /// idle from any state.
    pub fn reset(&mut self) {
        if let Some(engine) = &mut self.engine {
            engine.reset();
        }
        self.engine = None;
        self.state = ControlState::Idle;
    }

    /// Update the time-scale factor, forwarding it live to a running engine
    /// (the run continues; only future frames advance faster or slower).
    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = multiplier;
        if let Some(engine) = &mut self.engine {
            engine.set_speed_multiplier(multiplier);
        }
    }

    /// Select the target gate for the next run.  Changing gate while a run
    /// is active (or complete) forces an implicit reset.
    pub fn select_gate(&mut self, gate_id: &str) {
        if self.state != ControlState::Idle {
            self.reset();
        }
        self.selected_gate = gate_id.to_owned();
    }

    // ── Frame production ──────────────────────────────────────────────────

    /// Produce one frame at timestamp `now` — the cooperative entry point
    /// for hosts that own their own refresh loop.
    pub fn step(&mut self, now: TimestampMs) -> FrameSnapshot {
        match &mut self.engine {
            Some(engine) => {
                let snapshot = engine.update(now);
                if snapshot.is_complete && self.state == ControlState::Running {
                    self.state = ControlState::Complete;
                }
                snapshot
            }
            None => self.idle_snapshot(),
        }
    }

    /// Drive the run to completion: pull timestamps from `clock`, step, and
    /// forward each snapshot to `observer`.  Returns the number of frames
    /// produced (0 if no run is active).
    ///
    /// Terminates when the run completes or a `reset` has left the running
    /// state.  A zero speed multiplier never completes — use
    /// [`run_frames`](Self::run_frames) when the multiplier may be zero.
    pub fn run<C, O>(&mut self, clock: &mut C, observer: &mut O) -> usize
    where
        C: FrameClock,
        O: FrameObserver,
    {
        let mut frames = 0;
        while self.state == ControlState::Running {
            let now = clock.next_frame();
            let snapshot = self.step(now);
            frames += 1;
            observer.on_frame(&snapshot);
            if snapshot.is_complete {
                observer.on_run_end(&snapshot);
            }
        }
        frames
    }

    /// Like [`run`](Self::run) but bounded: at most `max_frames` frames.
    /// Returns the number produced.
    pub fn run_frames<C, O>(&mut self, max_frames: usize, clock: &mut C, observer: &mut O) -> usize
    where
        C: FrameClock,
        O: FrameObserver,
    {
        let mut frames = 0;
        while self.state == ControlState::Running && frames < max_frames {
            let now = clock.next_frame();
            let snapshot = self.step(now);
            frames += 1;
            observer.on_frame(&snapshot);
            if snapshot.is_complete {
                observer.on_run_end(&snapshot);
            }
        }
        frames
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn selected_gate(&self) -> &str {
        &self.selected_gate
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn layout(&self) -> &TerminalLayout {
        &self.layout
    }

    /// The active run's engine, if any (`Running` or `Complete`).
    pub fn engine(&self) -> Option<&ParticleEngine> {
        self.engine.as_ref()
    }

    /// The snapshot shape reported with no engine attached.
    fn idle_snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            particles: Vec::new(),
            heatmap: DensityGrid::zeroed(&self.layout.grid),
            passengers_arrived: 0,
            total_passengers: self.settings.total_passengers,
            elapsed_ms: 0.0,
            is_complete: false,
            congestion: CongestionLevel::Low,
        }
    }
}
