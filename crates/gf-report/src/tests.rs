//! Report mapping tests.
//!
//! Every mapping here is a pure function with fixed thresholds, so the tests
//! pin the exact boundary values the host dashboard relies on.

use gf_control::ControlState;
use gf_engine::CongestionLevel;

use crate::insights::generate_insights;
use crate::panel::{
    HeatIntensity, arrival_fraction, congestion_style, format_elapsed, heat_intensity, state_label,
};

// ── Insights ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod insights {
    use super::*;

    #[test]
    fn high_congestion_leads_with_two_advisories() {
        let list = generate_insights("Gate C4", 0, CongestionLevel::High);
        assert!(list[0].starts_with("High congestion detected near Gate C4."));
        assert!(list[1].starts_with("Recommend activating overflow holding area for Gate C4."));
    }

    #[test]
    fn medium_congestion_yields_one_pacing_advisory() {
        let list = generate_insights("Gate D1", 0, CongestionLevel::Medium);
        assert!(list[0].starts_with("Moderate foot traffic building toward Gate D1."));
        assert!(!list.iter().any(|s| s.starts_with("High congestion")));
    }

    #[test]
    fn staffing_recommendation_always_present() {
        for level in [CongestionLevel::Low, CongestionLevel::Medium, CongestionLevel::High] {
            for arrived in [0, 55, 120] {
                let list = generate_insights("Gate C2", arrived, level);
                assert!(
                    list.iter().any(|s| s.starts_with("AI Recommendation: For Gate C2,")),
                    "missing staffing recommendation for {level:?}/{arrived}"
                );
            }
        }
    }

    #[test]
    fn arrival_thresholds_pick_one_message() {
        // > 100 → ETA message only.
        let eta = generate_insights("C4", 101, CongestionLevel::Low);
        assert!(eta.iter().any(|s| s.contains("Estimated boarding completion")));
        assert!(!eta.iter().any(|s| s.contains("steady passenger flow")));

        // (50, 100] → steady-flow message only.
        let steady = generate_insights("C4", 100, CongestionLevel::Low);
        assert!(steady.iter().any(|s| s.contains("steady passenger flow")));
        assert!(!steady.iter().any(|s| s.contains("Estimated boarding completion")));

        // ≤ 50 → neither.
        let quiet = generate_insights("C4", 50, CongestionLevel::Low);
        assert!(!quiet.iter().any(|s| s.contains("steady passenger flow")));
        assert!(!quiet.iter().any(|s| s.contains("Estimated boarding completion")));
    }

    #[test]
    fn quiet_note_requires_low_congestion_and_few_arrivals() {
        let note = "Passenger flow is within normal parameters.";

        let quiet = generate_insights("C4", 29, CongestionLevel::Low);
        assert!(quiet.last().unwrap().starts_with(note));

        // Boundary: exactly 30 arrivals suppresses the note.
        let at_30 = generate_insights("C4", 30, CongestionLevel::Low);
        assert!(!at_30.iter().any(|s| s.starts_with(note)));

        // Any congestion above low suppresses it regardless of count.
        let medium = generate_insights("C4", 5, CongestionLevel::Medium);
        assert!(!medium.iter().any(|s| s.starts_with(note)));
    }

    #[test]
    fn counts_are_interpolated_into_messages() {
        let list = generate_insights("C4", 120, CongestionLevel::Low);
        assert!(list.iter().any(|s| s.starts_with("120 passengers have reached")));
    }

    #[test]
    fn busy_high_run_produces_four_advisories() {
        // high (2) + ETA (1) + staffing (1); the quiet note can't fire.
        let list = generate_insights("C4", 130, CongestionLevel::High);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn idle_frame_produces_two_advisories() {
        // staffing (1) + quiet note (1).
        let list = generate_insights("C4", 0, CongestionLevel::Low);
        assert_eq!(list.len(), 2);
    }
}

// ── Congestion style & state labels ───────────────────────────────────────────

#[cfg(test)]
mod styles {
    use super::*;

    #[test]
    fn congestion_style_triples() {
        let low = congestion_style(CongestionLevel::Low);
        assert_eq!((low.label, low.color), ("Low", "#10b981"));
        assert!((low.fill - 1.0 / 3.0).abs() < f32::EPSILON);

        let medium = congestion_style(CongestionLevel::Medium);
        assert_eq!((medium.label, medium.color), ("Medium", "#f59e0b"));
        assert!((medium.fill - 2.0 / 3.0).abs() < f32::EPSILON);

        let high = congestion_style(CongestionLevel::High);
        assert_eq!((high.label, high.color), ("High", "#ef4444"));
        assert_eq!(high.fill, 1.0);
    }

    #[test]
    fn state_labels() {
        assert_eq!(state_label(ControlState::Idle), "Idle");
        assert_eq!(state_label(ControlState::Running), "Boarding Active");
        assert_eq!(state_label(ControlState::Complete), "Boarding Complete");
    }
}

// ── Clock & arrival fraction ──────────────────────────────────────────────────

#[cfg(test)]
mod clock {
    use super::*;

    #[test]
    fn formats_zero_padded_minutes_and_seconds() {
        assert_eq!(format_elapsed(0.0), "00:00");
        assert_eq!(format_elapsed(999.0), "00:00");
        assert_eq!(format_elapsed(1_000.0), "00:01");
        assert_eq!(format_elapsed(65_000.0), "01:05");
        assert_eq!(format_elapsed(600_000.0), "10:00");
    }

    #[test]
    fn misbehaving_clock_inputs_render_as_zero() {
        assert_eq!(format_elapsed(-5_000.0), "00:00");
        assert_eq!(format_elapsed(f64::NAN), "00:00");
        assert_eq!(format_elapsed(f64::INFINITY), "00:00");
    }

    #[test]
    fn arrival_fraction_guards_zero_total() {
        assert_eq!(arrival_fraction(0, 0), 0.0);
        assert_eq!(arrival_fraction(5, 0), 0.0);
        assert_eq!(arrival_fraction(70, 140), 0.5);
        assert_eq!(arrival_fraction(140, 140), 1.0);
    }
}

// ── Heat-cell intensity ───────────────────────────────────────────────────────

#[cfg(test)]
mod heat {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(heat_intensity(0), HeatIntensity::None);
        assert_eq!(heat_intensity(1), HeatIntensity::Low);
        assert_eq!(heat_intensity(2), HeatIntensity::Low);
        assert_eq!(heat_intensity(3), HeatIntensity::Medium);
        assert_eq!(heat_intensity(5), HeatIntensity::Medium);
        assert_eq!(heat_intensity(6), HeatIntensity::High);
        assert_eq!(heat_intensity(50), HeatIntensity::High);
    }

    #[test]
    fn cell_colors() {
        assert_eq!(HeatIntensity::None.color(), "transparent");
        assert_eq!(HeatIntensity::Low.color(), "rgba(34, 197, 94, 0.15)");
        assert_eq!(HeatIntensity::Medium.color(), "rgba(234, 179, 8, 0.25)");
        assert_eq!(HeatIntensity::High.color(), "rgba(239, 68, 68, 0.35)");
    }

    #[test]
    fn cell_buckets_and_congestion_thresholds_stay_independent() {
        // Cell colors bucket on {≤2, ≤5}, frame congestion on {≥3, ≥6}.
        // The partitions happen to meet at the same counts today, but each
        // side owns its constants; pin both so neither drifts.
        assert_eq!(HeatIntensity::LOW_MAX, 2);
        assert_eq!(HeatIntensity::MEDIUM_MAX, 5);
        assert_eq!(CongestionLevel::MEDIUM_PEAK, 3);
        assert_eq!(CongestionLevel::HIGH_PEAK, 6);
        // An empty cell is its own render bucket; congestion has no analogue.
        assert_eq!(heat_intensity(0), HeatIntensity::None);
        assert_eq!(CongestionLevel::from_peak_density(0), CongestionLevel::Low);
    }
}
