//! The `ParticleEngine` and its frame-update path.

use gf_core::{ParticleId, Point, Rect, SimRng, TimestampMs};
use gf_layout::{Gate, GridSpec, TerminalLayout};

use crate::config::EngineConfig;
use crate::heatmap::DensityGrid;
use crate::particle::Particle;
use crate::snapshot::{CongestionLevel, FrameSnapshot, ParticleView};

/// Fraction of the configured duration over which spawn offsets are spread.
/// Staggered spawns keep arrivals from landing in one burst.
const SPAWN_WINDOW_FRACTION: f64 = 0.55;

/// Fraction of the configured duration one particle's path nominally takes
/// (at 1× speed and walking-speed factor 1.0).
const PATH_TIME_FRACTION: f64 = 0.45;

/// Deterministic-per-seed simulation of passengers flowing from lounge
/// areas to one boarding gate.
///
/// # Lifecycle
///
/// An engine is created per run and is idle until [`start`](Self::start),
/// which precomputes every particle trajectory in one pass.
/// [`update`](Self::update) is then called once per display-refresh tick
/// until the returned snapshot reports completion (or [`reset`](Self::reset)
/// intervenes).  Calling `start` again reinitializes all particles.
///
/// The engine is single-threaded by design: the particle array is mutated
/// only from the one `update` call path, so no locking exists anywhere.
pub struct ParticleEngine {
    // ── Immutable run parameters ──────────────────────────────────────────
    total_passengers: u32,
    simulation_duration_ms: f64,
    /// Resolved target (soft fallback already applied).
    target_gate: Gate,
    /// Lounge bounds particles originate from.  Never empty: a layout
    /// without lounges degrades to the whole terminal box.
    origin_regions: Vec<Rect>,
    grid: GridSpec,

    // ── Mutable run state ─────────────────────────────────────────────────
    rng: SimRng,
    particles: Vec<Particle>,
    start_ms: TimestampMs,
    last_frame_ms: TimestampMs,
    speed_multiplier: f64,
    running: bool,
    complete: bool,
    passengers_arrived: u32,
}

impl ParticleEngine {
    /// Build an engine against `layout`.
    ///
    /// An unknown `config.gate_id` resolves to the layout's first gate —
    /// construction never fails.
    pub fn new(config: EngineConfig, layout: &TerminalLayout) -> Self {
        let target_gate = layout.resolve_gate(&config.gate_id).clone();
        let origin_regions: Vec<Rect> = if layout.lounges.is_empty() {
            vec![layout.terminal]
        } else {
            layout.lounges.iter().map(|l| l.bounds).collect()
        };

        Self {
            total_passengers: config.total_passengers,
            simulation_duration_ms: config.simulation_duration_ms,
            target_gate,
            origin_regions,
            grid: layout.grid,
            rng: SimRng::new(config.seed),
            particles: Vec::new(),
            start_ms: 0.0,
            last_frame_ms: 0.0,
            speed_multiplier: config.speed_multiplier,
            running: false,
            complete: false,
            passengers_arrived: 0,
        }
    }

    // ── Run control ───────────────────────────────────────────────────────

    /// Begin a run at timestamp `now`: anchor the clock, discard any prior
    /// particle state, and precompute all trajectories.
    pub fn start(&mut self, now: TimestampMs) {
        self.start_ms = now;
        self.last_frame_ms = now;
        self.running = true;
        self.complete = false;
        self.passengers_arrived = 0;
        self.precompute_particles();
    }

    /// Update the time-scale factor used by subsequent [`update`](Self::update)
    /// calls.  Takes effect on the next frame; the current frame's delta has
    /// already been consumed.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = multiplier;
    }

    /// Discard all particle state and return to idle.  The engine is
    /// reusable only via a fresh [`start`](Self::start).
    pub fn reset(&mut self) {
        self.particles.clear();
        self.running = false;
        self.complete = false;
        self.passengers_arrived = 0;
        self.start_ms = 0.0;
        self.last_frame_ms = 0.0;
    }

    // ── Frame update ──────────────────────────────────────────────────────

    /// Advance the simulation to timestamp `now` and produce a snapshot.
    ///
    /// A no-op returning an idle-shaped snapshot when not running (before
    /// `start`, after `reset`, or once complete).
    pub fn update(&mut self, now: TimestampMs) -> FrameSnapshot {
        if !self.running {
            return self.idle_snapshot();
        }

        // Both quantities use the *current* multiplier: a speed change
        // rescales the elapsed clock and applies to future deltas, but the
        // progress already banked by previous frames stays banked.
        let elapsed_ms = (now - self.start_ms) * self.speed_multiplier;
        let delta_ms = (now - self.last_frame_ms) * self.speed_multiplier;
        self.last_frame_ms = now;

        // Nominal time for one particle to walk its whole path.  A zero or
        // negative configured duration degrades to instant arrival rather
        // than letting a non-finite increment reach the progress field.
        let nominal_path_ms = self.simulation_duration_ms * PATH_TIME_FRACTION;

        let mut visible: Vec<ParticleView> = Vec::new();
        let mut arrived_count: u32 = 0;
        let mut all_done = true;

        for p in &mut self.particles {
            if elapsed_ms < p.spawn_ms {
                all_done = false;
                continue;
            }

            if p.arrived {
                arrived_count += 1;
                continue;
            }

            all_done = false;

            let increment = if nominal_path_ms > 0.0 {
                ((delta_ms * p.speed as f64) / nominal_path_ms) as f32
            } else {
                1.0
            };
            // max(0.0) also absorbs NaN: progress never regresses and never
            // goes non-finite, whatever the clock or multiplier did.
            p.progress = (p.progress + increment.max(0.0)).min(1.0);

            if p.progress >= 1.0 {
                p.arrived = true;
                arrived_count += 1;
                continue;
            }

            let pos = p.position();
            visible.push(ParticleView {
                id: p.id,
                x: pos.x,
                y: pos.y,
                progress: p.progress,
                opacity: p.opacity(),
                size: p.size,
            });
        }

        self.passengers_arrived = arrived_count;

        if all_done && arrived_count == self.total_passengers {
            self.complete = true;
            self.running = false;
        }

        let heatmap =
            DensityGrid::from_points(&self.grid, visible.iter().map(|v| Point::new(v.x, v.y)));
        let congestion = CongestionLevel::from_peak_density(heatmap.max_count());

        FrameSnapshot {
            particles: visible,
            heatmap,
            passengers_arrived: arrived_count,
            total_passengers: self.total_passengers,
            elapsed_ms,
            is_complete: self.complete,
            congestion,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The resolved target gate (after any unknown-id fallback).
    pub fn target_gate(&self) -> &Gate {
        &self.target_gate
    }

    pub fn total_passengers(&self) -> u32 {
        self.total_passengers
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Generate all trajectories for this run and order them by spawn
    /// offset, so the earliest movers lead the per-frame scan.
    fn precompute_particles(&mut self) {
        let spawn_window_ms = self.simulation_duration_ms * SPAWN_WINDOW_FRACTION;
        let gate_center = self.target_gate.center;

        let mut particles = Vec::with_capacity(self.total_passengers as usize);
        for i in 0..self.total_passengers {
            particles.push(Particle::generate(
                ParticleId(i),
                gate_center,
                &self.origin_regions,
                spawn_window_ms,
                &mut self.rng,
            ));
        }
        particles.sort_by(|a, b| a.spawn_ms.total_cmp(&b.spawn_ms));
        self.particles = particles;
    }

    /// The snapshot shape reported while idle: no particles, a zeroed grid,
    /// the last arrival count, and the latched completion flag.
    fn idle_snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            particles: Vec::new(),
            heatmap: DensityGrid::zeroed(&self.grid),
            passengers_arrived: self.passengers_arrived,
            total_passengers: self.total_passengers,
            elapsed_ms: 0.0,
            is_complete: self.complete,
            congestion: CongestionLevel::Low,
        }
    }
}
