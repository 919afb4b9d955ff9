//! Controller state-machine and run-loop tests.

use gf_engine::FrameSnapshot;
use gf_layout::TerminalLayout;

use crate::{
    BoardingController, ControlState, FixedStepClock, FrameObserver, NoopObserver, RunSettings,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Small, fast, reproducible run: 10 passengers over 500 ms at seed 5.
fn quick_settings() -> RunSettings {
    RunSettings {
        total_passengers: 10,
        simulation_duration_ms: 500.0,
        seed: Some(5),
    }
}

fn controller() -> BoardingController {
    BoardingController::with_settings(TerminalLayout::standard(), quick_settings())
}

/// Observer that keeps every frame and the completion frame.
#[derive(Default)]
struct Recorder {
    frames: Vec<FrameSnapshot>,
    run_end: Option<FrameSnapshot>,
}

impl FrameObserver for Recorder {
    fn on_frame(&mut self, snapshot: &FrameSnapshot) {
        self.frames.push(snapshot.clone());
    }
    fn on_run_end(&mut self, snapshot: &FrameSnapshot) {
        self.run_end = Some(snapshot.clone());
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_machine {
    use super::*;

    #[test]
    fn starts_idle_with_first_gate_selected() {
        let ctl = controller();
        assert_eq!(ctl.state(), ControlState::Idle);
        assert_eq!(ctl.selected_gate(), "C1");
        assert!(ctl.engine().is_none());
    }

    #[test]
    fn step_while_idle_returns_idle_snapshot() {
        let mut ctl = controller();
        let snap = ctl.step(1_000.0);
        assert!(snap.particles.is_empty());
        assert!(!snap.is_complete);
        assert_eq!(snap.passengers_arrived, 0);
        assert_eq!(snap.total_passengers, 10);
        assert_eq!(ctl.state(), ControlState::Idle);
    }

    #[test]
    fn start_transitions_to_running() {
        let mut ctl = controller();
        ctl.start(0.0);
        assert_eq!(ctl.state(), ControlState::Running);
        assert!(ctl.engine().is_some_and(|e| e.is_running()));
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut ctl = controller();
        ctl.start(0.0);
        ctl.step(100.0);
        // A second start must not re-anchor the clock or rebuild the run.
        ctl.start(1_000.0);
        let snap = ctl.step(1_016.0);
        assert_eq!(snap.elapsed_ms, 1_016.0, "clock still anchored at the first start");
    }

    #[test]
    fn reset_returns_to_idle_from_running() {
        let mut ctl = controller();
        ctl.start(0.0);
        ctl.step(100.0);
        ctl.reset();
        assert_eq!(ctl.state(), ControlState::Idle);
        assert!(ctl.engine().is_none());

        let snap = ctl.step(200.0);
        assert!(snap.particles.is_empty());
        assert!(!snap.is_complete);
    }

    #[test]
    fn completion_transitions_to_complete() {
        let mut ctl = controller();
        ctl.start(0.0);
        let snap = ctl.step(60_000.0); // one oversized frame finishes the run
        assert!(snap.is_complete);
        assert_eq!(ctl.state(), ControlState::Complete);

        // Start from Complete begins a fresh run.
        ctl.start(70_000.0);
        assert_eq!(ctl.state(), ControlState::Running);
        assert!(!ctl.step(70_016.0).is_complete);
    }

    #[test]
    fn gate_change_while_active_forces_reset() {
        let mut ctl = controller();
        ctl.start(0.0);
        ctl.step(100.0);
        ctl.select_gate("D1");
        assert_eq!(ctl.state(), ControlState::Idle);
        assert!(ctl.engine().is_none());
        assert_eq!(ctl.selected_gate(), "D1");
    }

    #[test]
    fn gate_change_while_idle_just_updates_selection() {
        let mut ctl = controller();
        ctl.select_gate("C6");
        assert_eq!(ctl.state(), ControlState::Idle);
        assert_eq!(ctl.selected_gate(), "C6");
    }

    #[test]
    fn selected_gate_reaches_engine() {
        let mut ctl = controller();
        ctl.select_gate("D8/D9");
        ctl.start(0.0);
        assert_eq!(ctl.engine().map(|e| e.target_gate().id.as_str()), Some("D8/D9"));
    }
}

// ── Speed forwarding ──────────────────────────────────────────────────────────

#[cfg(test)]
mod speed {
    use super::*;

    #[test]
    fn speed_forwarded_live_to_running_engine() {
        let mut ctl = BoardingController::with_settings(
            TerminalLayout::standard(),
            RunSettings { simulation_duration_ms: 100_000.0, ..quick_settings() },
        );
        ctl.start(0.0);
        ctl.set_speed_multiplier(4.0);
        let snap = ctl.step(16.0);
        assert_eq!(snap.elapsed_ms, 64.0);
        assert_eq!(ctl.speed_multiplier(), 4.0);
    }

    #[test]
    fn speed_set_while_idle_applies_to_next_run() {
        let mut ctl = BoardingController::with_settings(
            TerminalLayout::standard(),
            RunSettings { simulation_duration_ms: 100_000.0, ..quick_settings() },
        );
        ctl.set_speed_multiplier(2.0);
        ctl.start(0.0);
        let snap = ctl.step(100.0);
        assert_eq!(snap.elapsed_ms, 200.0);
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_loop {
    use super::*;

    #[test]
    fn run_drives_to_completion() {
        let mut ctl = controller();
        let mut clock = FixedStepClock::new(16.0);
        let mut rec = Recorder::default();

        ctl.start(0.0);
        let frames = ctl.run(&mut clock, &mut rec);

        assert_eq!(ctl.state(), ControlState::Complete);
        assert_eq!(frames, rec.frames.len());
        assert!(frames > 1, "a 500 ms run at 16 ms cadence spans many frames");
        let last = rec.frames.last().unwrap();
        assert!(last.is_complete);
        assert_eq!(last.passengers_arrived, 10);
        assert_eq!(rec.run_end.as_ref(), Some(last));
    }

    #[test]
    fn run_without_start_produces_no_frames() {
        let mut ctl = controller();
        let mut clock = FixedStepClock::new(16.0);
        assert_eq!(ctl.run(&mut clock, &mut NoopObserver), 0);
        assert_eq!(ctl.state(), ControlState::Idle);
    }

    #[test]
    fn run_frames_is_bounded_even_when_frozen() {
        // A zero multiplier never completes; the bounded loop must bail out.
        let mut ctl = controller();
        ctl.set_speed_multiplier(0.0);
        ctl.start(0.0);
        let mut clock = FixedStepClock::new(16.0);
        let frames = ctl.run_frames(25, &mut clock, &mut NoopObserver);
        assert_eq!(frames, 25);
        assert_eq!(ctl.state(), ControlState::Running);
    }

    #[test]
    fn arrivals_monotonic_across_run_loop() {
        let mut ctl = controller();
        let mut clock = FixedStepClock::new(16.0);
        let mut rec = Recorder::default();
        ctl.start(0.0);
        ctl.run(&mut clock, &mut rec);

        let mut last = 0;
        for snap in &rec.frames {
            assert!(snap.passengers_arrived >= last);
            last = snap.passengers_arrived;
        }
        assert_eq!(last, 10);
    }

    #[test]
    fn fixed_seed_makes_runs_identical() {
        let run = || {
            let mut ctl = controller();
            let mut clock = FixedStepClock::new(16.0);
            let mut rec = Recorder::default();
            ctl.start(0.0);
            ctl.run(&mut clock, &mut rec);
            rec.frames
        };
        assert_eq!(run(), run());
    }
}

// ── Clocks ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clocks {
    use crate::{FixedStepClock, FrameClock, RealtimeClock};

    #[test]
    fn fixed_step_advances_uniformly() {
        let mut clock = FixedStepClock::new(16.0);
        assert_eq!(clock.next_frame(), 16.0);
        assert_eq!(clock.next_frame(), 32.0);
        assert_eq!(clock.next_frame(), 48.0);
    }

    #[test]
    fn fixed_step_respects_origin() {
        let mut clock = FixedStepClock::starting_at(1_000.0, 10.0);
        assert_eq!(clock.next_frame(), 1_010.0);
    }

    #[test]
    fn realtime_clock_is_monotonic() {
        let mut clock = RealtimeClock::new(0); // no sleep
        let a = clock.next_frame();
        let b = clock.next_frame();
        assert!(b >= a);
    }
}
