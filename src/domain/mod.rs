pub mod decision;
pub mod frame;
pub mod limits;
pub mod observation;
pub mod zone;

pub use decision::{LegalityDecision, LegalityStatus, ReasonCode, ReasonCodes};
pub use frame::{Borough, FrameContext};
pub use limits::{CurbRules, DEFAULT_DWELL_LIMIT_SECS};
pub use observation::{LaneType, VehicleObservation, VehicleType};
pub use zone::{ZoneDefinition, ZoneType};
