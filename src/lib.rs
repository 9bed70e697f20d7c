pub mod analytics;
pub mod api;
pub mod config;
pub mod domain;
pub mod observability;
pub mod rules;

pub use config::Config;
pub use domain::{
    FrameContext, LegalityDecision, LegalityStatus, ReasonCode, VehicleObservation, ZoneDefinition,
};
pub use rules::{RulesEngine, RulesLoader, RulesWatcher};
