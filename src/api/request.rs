use serde::{Deserialize, Serialize};

use crate::domain::{FrameContext, VehicleObservation, ZoneDefinition};

/// Batch analysis request over structured observations.
///
/// Enum fields are validated during deserialization; a request with an
/// unrecognized vehicle, lane, or zone type never reaches the engine.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Scene the observations belong to
    pub frame: FrameContext,

    /// Observed vehicles
    pub observations: Vec<VehicleObservation>,
}

/// One observation paired with the zone its ground point resolved to.
///
/// Zone assignment happens upstream (point-in-polygon over the scene's
/// zone set); unassigned observations carry no zone and get base
/// evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ZonedObservation {
    pub observation: VehicleObservation,

    #[serde(default)]
    pub zone: Option<ZoneDefinition>,
}

/// Batch analysis request where observations carry zone context.
#[derive(Debug, Serialize, Deserialize)]
pub struct ZonedAnalyzeRequest {
    /// Scene the observations belong to
    pub frame: FrameContext,

    /// Observation/zone assignments
    pub assignments: Vec<ZonedObservation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LaneType, VehicleType, ZoneType};

    #[test]
    fn test_analyze_request_deserialization() {
        let json = r#"{
            "frame": {
                "frame_id": "f1",
                "camera_id": "cam_01",
                "timestamp_utc": "2026-01-10T01:00:00Z",
                "borough": "manhattan",
                "segment_id": "seg_1001"
            },
            "observations": [
                {
                    "track_id": "t1",
                    "vehicle_type": "commercial",
                    "lane_type": "bus",
                    "is_double_parked": true,
                    "dwell_time_seconds": 2200
                }
            ]
        }"#;

        let req: AnalyzeRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.frame.frame_id, "f1");
        assert_eq!(req.observations.len(), 1);
        assert_eq!(req.observations[0].vehicle_type, VehicleType::Commercial);
        assert_eq!(req.observations[0].lane_type, LaneType::Bus);
        assert!(req.observations[0].is_double_parked);
        // Unspecified flag defaults to false
        assert!(!req.observations[0].is_obstructing);
    }

    #[test]
    fn test_zoned_request_deserialization() {
        let json = r#"{
            "frame": {
                "frame_id": "f2",
                "camera_id": "cam_02",
                "timestamp_utc": "2026-01-10T14:00:00Z",
                "borough": "brooklyn",
                "segment_id": "seg_2002"
            },
            "assignments": [
                {
                    "observation": {
                        "track_id": "t1",
                        "vehicle_type": "passenger",
                        "lane_type": "parking"
                    },
                    "zone": {
                        "zone_id": "z1",
                        "zone_type": "no_parking",
                        "polygon": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]
                    }
                },
                {
                    "observation": {
                        "track_id": "t2",
                        "vehicle_type": "passenger",
                        "lane_type": "parking"
                    }
                }
            ]
        }"#;

        let req: ZonedAnalyzeRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.assignments.len(), 2);
        assert_eq!(
            req.assignments[0].zone.as_ref().unwrap().zone_type,
            ZoneType::NoParking
        );
        assert!(req.assignments[1].zone.is_none());
    }

    #[test]
    fn test_malformed_enum_rejected_at_boundary() {
        let json = r#"{
            "frame": {
                "frame_id": "f1",
                "camera_id": "cam_01",
                "timestamp_utc": "2026-01-10T01:00:00Z",
                "borough": "manhattan",
                "segment_id": "seg_1001"
            },
            "observations": [
                {
                    "track_id": "t1",
                    "vehicle_type": "tank",
                    "lane_type": "bus"
                }
            ]
        }"#;

        let result = serde_json::from_str::<AnalyzeRequest>(json);
        assert!(result.is_err());
    }
}
