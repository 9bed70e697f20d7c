use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::observation::VehicleType;

/// Dwell limit in seconds applied when a vehicle type has no configured
/// entry.
pub const DEFAULT_DWELL_LIMIT_SECS: u32 = 900;

fn default_version() -> String {
    "0.0.0".to_string()
}

/// Curb rule configuration.
///
/// Loaded once from YAML and held read-only for the engine's lifetime.
/// An absent document or absent per-type entry falls back to
/// [`DEFAULT_DWELL_LIMIT_SECS`]; neither is an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurbRules {
    /// Version identifier, used for reload change detection
    #[serde(rename = "rules_version", default = "default_version")]
    pub version: String,

    /// Per-vehicle-type dwell limits in seconds
    #[serde(default)]
    pub dwell_time_limits: HashMap<VehicleType, u32>,
}

impl CurbRules {
    /// Create an empty configuration; every lookup yields the default.
    pub fn empty() -> Self {
        CurbRules {
            version: default_version(),
            dwell_time_limits: HashMap::new(),
        }
    }

    /// Dwell limit for a vehicle type, falling back to the default.
    #[inline]
    pub fn limit_for(&self, vehicle_type: VehicleType) -> u32 {
        self.dwell_time_limits
            .get(&vehicle_type)
            .copied()
            .unwrap_or(DEFAULT_DWELL_LIMIT_SECS)
    }

    /// Number of configured per-type entries.
    pub fn limit_entries(&self) -> usize {
        self.dwell_time_limits.len()
    }
}

impl Default for CurbRules {
    fn default() -> Self {
        CurbRules::empty()
    }
}
