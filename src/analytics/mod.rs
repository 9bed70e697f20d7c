use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{LaneType, LegalityDecision, LegalityStatus, ReasonCode, VehicleObservation};

/// Nominal curb capacity used for the occupancy ratio.
pub const DEFAULT_CURB_CAPACITY: usize = 20;

/// Per-status decision counts for one analyzed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionSummary {
    pub legal: u64,
    pub likely_illegal: u64,
    pub uncertain: u64,
    pub in_transit: u64,
}

/// Share of the curb segment occupied by observed vehicles, against the
/// nominal capacity.
pub fn occupancy_rate(observations: &[VehicleObservation]) -> f64 {
    occupancy_rate_with_capacity(observations, DEFAULT_CURB_CAPACITY)
}

/// Occupancy against an explicit capacity, clamped to 1.0 and rounded
/// to three decimals. A zero capacity yields 0.0.
pub fn occupancy_rate_with_capacity(observations: &[VehicleObservation], capacity: usize) -> f64 {
    if capacity == 0 {
        return 0.0;
    }

    let occupied = observations
        .iter()
        .filter(|o| {
            matches!(
                o.lane_type,
                LaneType::Parking | LaneType::Travel | LaneType::Bus | LaneType::Bike
            )
        })
        .count();

    let rate = (occupied as f64 / capacity as f64).min(1.0);
    (rate * 1000.0).round() / 1000.0
}

/// Count decisions per status.
pub fn summarize_decisions(decisions: &[LegalityDecision]) -> DecisionSummary {
    let mut summary = DecisionSummary::default();

    for decision in decisions {
        match decision.status {
            LegalityStatus::Legal => summary.legal += 1,
            LegalityStatus::LikelyIllegal => summary.likely_illegal += 1,
            LegalityStatus::Uncertain => summary.uncertain += 1,
            LegalityStatus::InTransit => summary.in_transit += 1,
        }
    }

    summary
}

/// Count occurrences of each reason code across a batch of decisions.
pub fn violation_breakdown(decisions: &[LegalityDecision]) -> BTreeMap<ReasonCode, u64> {
    let mut counts = BTreeMap::new();

    for decision in decisions {
        for code in &decision.reason_codes {
            *counts.entry(*code).or_insert(0) += 1;
        }
    }

    counts
}
