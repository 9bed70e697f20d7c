use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Legality outcome with severity ordering.
///
/// Statuses are ordered from least to most severe. Layering zone context
/// onto a base decision can only maintain or raise the severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum LegalityStatus {
    /// No violation condition observed
    Legal = 0,
    /// Vehicle is moving through the scene; legality is not evaluated.
    /// Produced by upstream zone mapping, never by the rules engine.
    InTransit = 1,
    /// Violation conditions present but none conclusive
    Uncertain = 2,
    /// At least one conclusive violation condition
    LikelyIllegal = 3,
}

impl LegalityStatus {
    /// Returns the more severe of two statuses.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        std::cmp::max(self, other)
    }

    /// Returns true if this status flags a probable violation.
    #[inline]
    pub fn is_violation(&self) -> bool {
        *self == LegalityStatus::LikelyIllegal
    }

    /// Returns the severity rank (0-3).
    #[inline]
    pub fn severity(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LegalityStatus::Legal => "legal",
            LegalityStatus::InTransit => "in_transit",
            LegalityStatus::Uncertain => "uncertain",
            LegalityStatus::LikelyIllegal => "likely_illegal",
        }
    }

    /// Parse from string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "legal" => Some(LegalityStatus::Legal),
            "in_transit" => Some(LegalityStatus::InTransit),
            "uncertain" => Some(LegalityStatus::Uncertain),
            "likely_illegal" => Some(LegalityStatus::LikelyIllegal),
            _ => None,
        }
    }
}

impl fmt::Display for LegalityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Machine-readable code for one condition contributing to a decision.
///
/// Serialized as the wire string (e.g. "bus_lane_occupied"). Keeping the
/// set closed makes status derivation exhaustive at compile time while the
/// wire format stays plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    DoubleParkingDetected,
    CriticalObstruction,
    BusLaneOccupied,
    BikeLaneOccupied,
    DwellTimeExceeded,
    OvernightCommercialRestriction,
    NoParkingZoneViolation,
    FireHydrantZoneViolation,
    TravelLaneViolation,
    LoadingZonePassengerOverstay,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::DoubleParkingDetected => "double_parking_detected",
            ReasonCode::CriticalObstruction => "critical_obstruction",
            ReasonCode::BusLaneOccupied => "bus_lane_occupied",
            ReasonCode::BikeLaneOccupied => "bike_lane_occupied",
            ReasonCode::DwellTimeExceeded => "dwell_time_exceeded",
            ReasonCode::OvernightCommercialRestriction => "overnight_commercial_restriction",
            ReasonCode::NoParkingZoneViolation => "no_parking_zone_violation",
            ReasonCode::FireHydrantZoneViolation => "fire_hydrant_zone_violation",
            ReasonCode::TravelLaneViolation => "travel_lane_violation",
            ReasonCode::LoadingZonePassengerOverstay => "loading_zone_passenger_overstay",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reason codes in evaluation order.
///
/// SmallVec optimizes for the common case of 0-4 codes per decision.
pub type ReasonCodes = SmallVec<[ReasonCode; 4]>;

/// Legality decision for one observed vehicle.
///
/// Created fresh per evaluation and never mutated after return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalityDecision {
    /// Track identifier echoed from the observation
    pub track_id: String,

    /// Derived legality status
    pub status: LegalityStatus,

    /// Conditions that fired, in evaluation order
    pub reason_codes: ReasonCodes,

    /// Confidence in the status, in [0, 1]
    pub confidence: f64,
}

impl LegalityDecision {
    /// Check whether a specific code fired.
    pub fn has_code(&self, code: ReasonCode) -> bool {
        self.reason_codes.contains(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering() {
        assert!(LegalityStatus::Legal < LegalityStatus::InTransit);
        assert!(LegalityStatus::InTransit < LegalityStatus::Uncertain);
        assert!(LegalityStatus::Uncertain < LegalityStatus::LikelyIllegal);
    }

    #[test]
    fn test_status_max() {
        assert_eq!(
            LegalityStatus::Legal.max(LegalityStatus::Uncertain),
            LegalityStatus::Uncertain
        );
        assert_eq!(
            LegalityStatus::LikelyIllegal.max(LegalityStatus::Legal),
            LegalityStatus::LikelyIllegal
        );
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&LegalityStatus::LikelyIllegal).unwrap();
        assert_eq!(json, "\"likely_illegal\"");

        let parsed: LegalityStatus = serde_json::from_str("\"in_transit\"").unwrap();
        assert_eq!(parsed, LegalityStatus::InTransit);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(LegalityStatus::from_str("legal"), Some(LegalityStatus::Legal));
        assert_eq!(LegalityStatus::from_str("LEGAL"), None);
        assert_eq!(LegalityStatus::from_str("parked"), None);
    }

    #[test]
    fn test_reason_code_wire_strings() {
        let json = serde_json::to_string(&ReasonCode::BusLaneOccupied).unwrap();
        assert_eq!(json, "\"bus_lane_occupied\"");
        assert_eq!(
            ReasonCode::OvernightCommercialRestriction.as_str(),
            "overnight_commercial_restriction"
        );
    }

    #[test]
    fn test_decision_serialization_round_trip() {
        let decision = LegalityDecision {
            track_id: "t1".to_string(),
            status: LegalityStatus::LikelyIllegal,
            reason_codes: smallvec::smallvec![
                ReasonCode::DoubleParkingDetected,
                ReasonCode::DwellTimeExceeded
            ],
            confidence: 0.92,
        };

        let json = serde_json::to_string(&decision).unwrap();
        assert!(json.contains("\"double_parking_detected\""));

        let parsed: LegalityDecision = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, LegalityStatus::LikelyIllegal);
        assert!(parsed.has_code(ReasonCode::DwellTimeExceeded));
    }
}
