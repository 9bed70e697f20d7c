use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// NYC borough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Borough {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    StatenIsland,
}

impl Borough {
    pub fn as_str(&self) -> &'static str {
        match self {
            Borough::Manhattan => "manhattan",
            Borough::Brooklyn => "brooklyn",
            Borough::Queens => "queens",
            Borough::Bronx => "bronx",
            Borough::StatenIsland => "staten_island",
        }
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one analyzed scene.
///
/// Constructed once per analysis request and immutable thereafter. The
/// rules engine consults only the UTC hour of `timestamp_utc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameContext {
    /// Frame identifier
    pub frame_id: String,

    /// Camera that produced the frame
    pub camera_id: String,

    /// Capture time in UTC
    pub timestamp_utc: DateTime<Utc>,

    /// Borough the camera is located in
    pub borough: Borough,

    /// Unique curb segment identifier
    pub segment_id: String,
}

impl FrameContext {
    /// Hour of day (UTC) the frame was captured.
    #[inline]
    pub fn hour_utc(&self) -> u32 {
        self.timestamp_utc.hour()
    }

    /// The overnight window is midnight to 6 AM UTC.
    #[inline]
    pub fn is_overnight(&self) -> bool {
        self.hour_utc() < 6
    }
}
