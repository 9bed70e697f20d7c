use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Passenger,
    Commercial,
    Bus,
    Bike,
    Scooter,
    Other,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Passenger => "passenger",
            VehicleType::Commercial => "commercial",
            VehicleType::Bus => "bus",
            VehicleType::Bike => "bike",
            VehicleType::Scooter => "scooter",
            VehicleType::Other => "other",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lane the vehicle occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneType {
    Travel,
    Bus,
    Bike,
    Parking,
    Unknown,
}

impl LaneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaneType::Travel => "travel",
            LaneType::Bus => "bus",
            LaneType::Bike => "bike",
            LaneType::Parking => "parking",
            LaneType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LaneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One vehicle's state at evaluation time.
///
/// Enum membership is validated here at the serde boundary; the rules
/// engine assumes a fully populated, well-typed observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleObservation {
    /// Opaque track identifier, unique within a batch
    pub track_id: String,

    /// Vehicle classification
    pub vehicle_type: VehicleType,

    /// Lane the vehicle occupies
    pub lane_type: LaneType,

    /// Whether the vehicle is double-parked
    #[serde(default)]
    pub is_double_parked: bool,

    /// Whether the vehicle obstructs traffic
    #[serde(default)]
    pub is_obstructing: bool,

    /// Distance from the curb in meters. Informational only; consulted
    /// by no rule.
    #[serde(default)]
    pub curb_distance_m: f64,

    /// Seconds the vehicle has occupied its current position
    #[serde(default)]
    pub dwell_time_seconds: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_serialization() {
        let json = serde_json::to_string(&VehicleType::Commercial).unwrap();
        assert_eq!(json, "\"commercial\"");

        let parsed: VehicleType = serde_json::from_str("\"scooter\"").unwrap();
        assert_eq!(parsed, VehicleType::Scooter);
    }

    #[test]
    fn test_observation_defaults() {
        let json = r#"{
            "track_id": "t1",
            "vehicle_type": "passenger",
            "lane_type": "parking"
        }"#;

        let obs: VehicleObservation = serde_json::from_str(json).unwrap();
        assert!(!obs.is_double_parked);
        assert!(!obs.is_obstructing);
        assert_eq!(obs.curb_distance_m, 0.0);
        assert_eq!(obs.dwell_time_seconds, 0);
    }

    #[test]
    fn test_unknown_vehicle_type_rejected() {
        let json = r#"{
            "track_id": "t1",
            "vehicle_type": "hovercraft",
            "lane_type": "parking"
        }"#;

        let result = serde_json::from_str::<VehicleObservation>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_lane_type_rejected() {
        let json = r#"{
            "track_id": "t1",
            "vehicle_type": "passenger",
            "lane_type": "median"
        }"#;

        let result = serde_json::from_str::<VehicleObservation>(json);
        assert!(result.is_err());
    }
}
