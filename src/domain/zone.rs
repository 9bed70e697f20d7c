use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a curb zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    Parking,
    NoParking,
    BusLane,
    BikeLane,
    LoadingZone,
    FireHydrant,
    DoubleParking,
    TravelLane,
}

impl ZoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Parking => "parking",
            ZoneType::NoParking => "no_parking",
            ZoneType::BusLane => "bus_lane",
            ZoneType::BikeLane => "bike_lane",
            ZoneType::LoadingZone => "loading_zone",
            ZoneType::FireHydrant => "fire_hydrant",
            ZoneType::DoubleParking => "double_parking",
            ZoneType::TravelLane => "travel_lane",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named polygonal curb area with a semantic type.
///
/// Zones come from user drawings or auto-detection upstream. The rules
/// engine only reads `zone_type`; the polygon is carried for the
/// geometry service and annotation layers, which assign observations to
/// zones before evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDefinition {
    /// Zone identifier
    pub zone_id: String,

    /// Semantic type
    pub zone_type: ZoneType,

    /// Image-space polygon vertices as [x, y] pairs
    pub polygon: Vec<[f64; 2]>,

    /// Display label
    #[serde(default)]
    pub label: String,
}
