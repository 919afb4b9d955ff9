//! boarding — headless end-to-end demo for the gateflow framework.
//!
//! Runs one full boarding call for gate C4 of the built-in terminal: 140
//! passengers, 18 s simulated duration, advanced at 4× through a fixed-step
//! frame clock.  Frame aggregates stream to a CSV log while a status line
//! prints once per simulated second, ending with the operational insight
//! list a dashboard would show.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use gf_control::{BoardingController, FixedStepClock, FrameObserver, RunSettings};
use gf_core::whole_seconds;
use gf_engine::FrameSnapshot;
use gf_layout::TerminalLayout;
use gf_output::{CsvWriter, OutputWriter, RecordingObserver};
use gf_report::{arrival_fraction, congestion_style, format_elapsed, generate_insights, state_label};

// ── Constants ─────────────────────────────────────────────────────────────────

const GATE_ID:          &str = "C4";
const PASSENGERS:       u32  = 140;
const DURATION_MS:      f64  = 18_000.0; // simulated boarding-call window
const SPEED_MULTIPLIER: f64  = 4.0;
const FRAME_STEP_MS:    f64  = 16.0;     // ~60 fps refresh signal
const SEED:             u64  = 42;

// ── Observer wrapper: status lines + frame recording ──────────────────────────

struct StatusObserver<W: OutputWriter> {
    inner: RecordingObserver<W>,
    /// Last simulated second a status line was printed for.
    last_printed_sec: Option<u64>,
    final_snapshot: Option<FrameSnapshot>,
}

impl<W: OutputWriter> StatusObserver<W> {
    fn new(inner: RecordingObserver<W>) -> Self {
        Self { inner, last_printed_sec: None, final_snapshot: None }
    }
}

impl<W: OutputWriter> FrameObserver for StatusObserver<W> {
    fn on_frame(&mut self, snapshot: &FrameSnapshot) {
        let sec = whole_seconds(snapshot.elapsed_ms);
        if self.last_printed_sec != Some(sec) {
            self.last_printed_sec = Some(sec);
            let style = congestion_style(snapshot.congestion);
            println!(
                "  [{}] {:>3} / {} boarded ({:>3.0}%)  in flight: {:>3}  congestion: {}",
                format_elapsed(snapshot.elapsed_ms),
                snapshot.passengers_arrived,
                snapshot.total_passengers,
                arrival_fraction(snapshot.passengers_arrived, snapshot.total_passengers) * 100.0,
                snapshot.visible_count(),
                style.label,
            );
        }
        self.inner.on_frame(snapshot);
    }

    fn on_run_end(&mut self, snapshot: &FrameSnapshot) {
        self.final_snapshot = Some(snapshot.clone());
        self.inner.on_run_end(snapshot);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== boarding — gateflow demo ===");
    println!("Gate: {GATE_ID}  |  Passengers: {PASSENGERS}  |  Speed: {SPEED_MULTIPLIER}x  |  Seed: {SEED}");
    println!();

    // 1. Built-in terminal layout.
    let layout = TerminalLayout::standard();
    let gate_label = layout.resolve_gate(GATE_ID).label.clone();
    println!(
        "Terminal: {} gates, {} lounges, {}x{} heat grid",
        layout.gates.len(),
        layout.lounges.len(),
        layout.grid.cols,
        layout.grid.rows
    );

    // 2. Controller for the selected gate.
    let settings = RunSettings {
        total_passengers: PASSENGERS,
        simulation_duration_ms: DURATION_MS,
        seed: Some(SEED),
    };
    let mut controller = BoardingController::with_settings(layout, settings);
    controller.select_gate(GATE_ID);
    controller.set_speed_multiplier(SPEED_MULTIPLIER);

    // 3. Frame-log output.
    std::fs::create_dir_all("output/boarding")?;
    let writer = CsvWriter::new(Path::new("output/boarding"))?;
    let mut obs = StatusObserver::new(RecordingObserver::new(writer));

    // 4. Run to completion on a fixed-step clock.
    let mut clock = FixedStepClock::new(FRAME_STEP_MS);
    controller.start(0.0);
    println!("State: {}", state_label(controller.state()));
    println!();

    let t0 = Instant::now();
    let frames = controller.run(&mut clock, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Final insight list, as the dashboard would render it.
    let last = obs
        .final_snapshot
        .clone()
        .expect("a completed run always delivers a final snapshot");
    println!();
    println!("Operational insights:");
    for insight in generate_insights(&gate_label, last.passengers_arrived, last.congestion) {
        println!("  - {insight}");
    }

    // 6. Summary.
    println!();
    println!("Run complete in {:.3} s wall time", elapsed.as_secs_f64());
    println!("{:<22} {:<14}", "Metric", "Value");
    println!("{}", "-".repeat(36));
    println!("{:<22} {:<14}", "State", state_label(controller.state()));
    println!("{:<22} {:<14}", "Frames", frames);
    println!("{:<22} {:<14}", "Frame rows logged", obs.inner.frames_written());
    println!("{:<22} {:<14}", "Boarded", format!("{} / {}", last.passengers_arrived, last.total_passengers));
    println!("{:<22} {:<14}", "Simulated time", format_elapsed(last.elapsed_ms));
    println!("{:<22} {:<14}", "Final congestion", congestion_style(last.congestion).label);
    println!();
    println!("Frame log: output/boarding/frame_log.csv");

    Ok(())
}
