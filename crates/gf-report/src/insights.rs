//! Advisory text generation from aggregate congestion state.
//!
//! Pure template selection over fixed thresholds — no learning, no external
//! calls.  The host dashboard presents these as "operational insights"
//! alongside the live map, regenerating them from every snapshot.

use gf_engine::CongestionLevel;

/// Arrival count above which the ETA-style advisory fires.
const ETA_ARRIVALS: u32 = 100;
/// Arrival count above which the steady-flow advisory fires (when the ETA
/// one does not).
const STEADY_FLOW_ARRIVALS: u32 = 50;
/// Arrival count below which, under low congestion, the all-normal note is
/// appended.
const QUIET_ARRIVALS: u32 = 30;

/// Produce the ordered advisory list for one frame of aggregate state.
///
/// Rules, applied top to bottom (order is part of the contract — the host
/// renders the list as-is):
///
/// 1. high congestion → two staffing/overflow advisories;
///    medium → one pacing advisory;
/// 2. arrivals > 100 → ETA message; else arrivals > 50 → steady-flow
///    message;
/// 3. always: a gate-specific staffing recommendation;
/// 4. low congestion with arrivals < 30 → all-normal note.
pub fn generate_insights(
    gate_label: &str,
    passengers_arrived: u32,
    congestion: CongestionLevel,
) -> Vec<String> {
    let mut insights = Vec::new();

    match congestion {
        CongestionLevel::High => {
            insights.push(format!(
                "High congestion detected near {gate_label}. Consider opening adjacent gates \
                 or deploying additional ground staff to manage passenger flow."
            ));
            insights.push(format!(
                "Recommend activating overflow holding area for {gate_label}. Current density \
                 exceeds comfortable threshold for smooth boarding."
            ));
        }
        CongestionLevel::Medium => {
            insights.push(format!(
                "Moderate foot traffic building toward {gate_label}. Boarding is progressing \
                 at expected pace — monitor for potential bottlenecks."
            ));
        }
        CongestionLevel::Low => {}
    }

    if passengers_arrived > ETA_ARRIVALS {
        insights.push(format!(
            "{passengers_arrived} passengers have reached the gate area. Estimated boarding \
             completion within 5 minutes at current rate."
        ));
    } else if passengers_arrived > STEADY_FLOW_ARRIVALS {
        insights.push(format!(
            "Boarding call is generating steady passenger flow. {passengers_arrived} passengers \
             in gate zone — approximately 60% through the boarding process."
        ));
    }

    insights.push(format!(
        "AI Recommendation: For {gate_label}, pre-position wheelchair assistance and priority \
         boarding lane staff based on flight manifest data."
    ));

    if congestion == CongestionLevel::Low && passengers_arrived < QUIET_ARRIVALS {
        insights.push(
            "Passenger flow is within normal parameters. No operational intervention required \
             at this time."
                .to_owned(),
        );
    }

    insights
}
