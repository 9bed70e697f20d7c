use std::path::Path;

use crate::domain::{
    CurbRules, FrameContext, LaneType, LegalityDecision, LegalityStatus, ReasonCode, ReasonCodes,
    VehicleObservation, VehicleType, ZoneDefinition, ZoneType,
};

use super::loader::load_rules_or_default;

const LEGAL_CONFIDENCE: f64 = 0.95;
const CRITICAL_CONFIDENCE: f64 = 0.92;
const LANE_CONFIDENCE: f64 = 0.88;
const UNCERTAIN_CONFIDENCE: f64 = 0.75;

/// Codes that force `likely_illegal` in the zone-aware derivation.
const ZONE_CRITICAL_CODES: [ReasonCode; 5] = [
    ReasonCode::FireHydrantZoneViolation,
    ReasonCode::NoParkingZoneViolation,
    ReasonCode::TravelLaneViolation,
    ReasonCode::DoubleParkingDetected,
    ReasonCode::CriticalObstruction,
];

/// Deterministic legality rules engine.
///
/// Stateless after construction: evaluation is a pure function of the
/// loaded rule configuration and the call inputs, so a shared engine is
/// safe to call concurrently without locking.
#[derive(Debug, Clone)]
pub struct RulesEngine {
    rules: CurbRules,
}

impl RulesEngine {
    /// Create an engine over an already-loaded configuration.
    pub fn new(rules: CurbRules) -> Self {
        RulesEngine { rules }
    }

    /// Create an engine from a rules file.
    ///
    /// A missing or unreadable file yields the all-defaults configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        RulesEngine::new(load_rules_or_default(path))
    }

    /// The loaded configuration.
    pub fn rules(&self) -> &CurbRules {
        &self.rules
    }

    /// Dwell limit in seconds for a vehicle type.
    #[inline]
    pub fn dwell_limit(&self, vehicle_type: VehicleType) -> u32 {
        self.rules.limit_for(vehicle_type)
    }

    /// Evaluate one observation against the base rule set.
    ///
    /// Checks are independent; several codes may accumulate. Collection
    /// order is fixed and observable in `reason_codes`.
    pub fn evaluate(
        &self,
        frame: &FrameContext,
        observation: &VehicleObservation,
    ) -> LegalityDecision {
        let mut reason_codes = ReasonCodes::new();

        let dwell_limit = self.dwell_limit(observation.vehicle_type);

        if observation.is_double_parked {
            reason_codes.push(ReasonCode::DoubleParkingDetected);
        }
        if observation.is_obstructing {
            reason_codes.push(ReasonCode::CriticalObstruction);
        }
        match observation.lane_type {
            LaneType::Bus => reason_codes.push(ReasonCode::BusLaneOccupied),
            LaneType::Bike => reason_codes.push(ReasonCode::BikeLaneOccupied),
            _ => {}
        }
        if observation.dwell_time_seconds > dwell_limit {
            reason_codes.push(ReasonCode::DwellTimeExceeded);
        }
        if frame.is_overnight() && observation.vehicle_type == VehicleType::Commercial {
            reason_codes.push(ReasonCode::OvernightCommercialRestriction);
        }

        let (status, confidence) = derive_base_status(&reason_codes);

        LegalityDecision {
            track_id: observation.track_id.clone(),
            status,
            reason_codes,
            confidence,
        }
    }

    /// Evaluate with zone context layered on top of the base checks.
    ///
    /// Without a zone this is identical to [`evaluate`](Self::evaluate).
    /// With one, zone codes are appended to the base set (deduplicating
    /// lane-occupancy codes the base pass already produced) and status
    /// and confidence are re-derived from the combined set.
    pub fn evaluate_with_zone(
        &self,
        frame: &FrameContext,
        observation: &VehicleObservation,
        zone: Option<&ZoneDefinition>,
    ) -> LegalityDecision {
        let mut decision = self.evaluate(frame, observation);

        let Some(zone) = zone else {
            return decision;
        };

        match zone.zone_type {
            ZoneType::NoParking => {
                decision.reason_codes.push(ReasonCode::NoParkingZoneViolation);
            }
            ZoneType::FireHydrant => {
                decision
                    .reason_codes
                    .push(ReasonCode::FireHydrantZoneViolation);
            }
            ZoneType::TravelLane => {
                decision.reason_codes.push(ReasonCode::TravelLaneViolation);
            }
            ZoneType::BusLane => {
                if observation.vehicle_type != VehicleType::Bus
                    && !decision.reason_codes.contains(&ReasonCode::BusLaneOccupied)
                {
                    decision.reason_codes.push(ReasonCode::BusLaneOccupied);
                }
            }
            ZoneType::BikeLane => {
                if observation.vehicle_type != VehicleType::Bike
                    && !decision
                        .reason_codes
                        .contains(&ReasonCode::BikeLaneOccupied)
                {
                    decision.reason_codes.push(ReasonCode::BikeLaneOccupied);
                }
            }
            ZoneType::LoadingZone => {
                if observation.vehicle_type == VehicleType::Passenger {
                    let limit = self.dwell_limit(VehicleType::Passenger);
                    if observation.dwell_time_seconds > limit {
                        decision
                            .reason_codes
                            .push(ReasonCode::LoadingZonePassengerOverstay);
                    }
                }
            }
            ZoneType::Parking | ZoneType::DoubleParking => {}
        }

        let (status, confidence) = derive_zone_status(&decision.reason_codes);
        decision.status = status;
        decision.confidence = confidence;
        decision
    }
}

/// Status derivation for the base pass. Matches the "lane_occupied" wire
/// suffix; the zone-aware pass matches the broader "_occupied" suffix.
fn derive_base_status(codes: &[ReasonCode]) -> (LegalityStatus, f64) {
    if codes.is_empty() {
        return (LegalityStatus::Legal, LEGAL_CONFIDENCE);
    }
    if codes.contains(&ReasonCode::CriticalObstruction)
        || codes.contains(&ReasonCode::DoubleParkingDetected)
    {
        return (LegalityStatus::LikelyIllegal, CRITICAL_CONFIDENCE);
    }
    if codes.iter().any(|c| c.as_str().ends_with("lane_occupied")) {
        return (LegalityStatus::LikelyIllegal, LANE_CONFIDENCE);
    }
    (LegalityStatus::Uncertain, UNCERTAIN_CONFIDENCE)
}

/// Status derivation over the combined base + zone code set.
fn derive_zone_status(codes: &[ReasonCode]) -> (LegalityStatus, f64) {
    if codes.is_empty() {
        return (LegalityStatus::Legal, LEGAL_CONFIDENCE);
    }
    if codes.iter().any(|c| ZONE_CRITICAL_CODES.contains(c)) {
        return (LegalityStatus::LikelyIllegal, CRITICAL_CONFIDENCE);
    }
    if codes.iter().any(|c| c.as_str().ends_with("_occupied")) {
        return (LegalityStatus::LikelyIllegal, LANE_CONFIDENCE);
    }
    (LegalityStatus::Uncertain, UNCERTAIN_CONFIDENCE)
}
