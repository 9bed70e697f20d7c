pub mod engine;
pub mod hot_reload;
pub mod loader;

pub use engine::RulesEngine;
pub use hot_reload::RulesWatcher;
pub use loader::{load_rules, load_rules_or_default, RulesError, RulesLoader};
