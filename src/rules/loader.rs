use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::CurbRules;

/// Errors that can occur while loading the rules document.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load curb rules from a YAML file.
pub fn load_rules(path: impl AsRef<Path>) -> Result<CurbRules, RulesError> {
    let content = fs::read_to_string(path)?;
    let rules: CurbRules = serde_yaml::from_str(&content)?;
    Ok(rules)
}

/// Load curb rules, treating a missing or unreadable document as the
/// empty configuration. All dwell lookups then fall back to the default
/// limit; this is not an error.
pub fn load_rules_or_default(path: impl AsRef<Path>) -> CurbRules {
    let path = path.as_ref();
    match load_rules(path) {
        Ok(rules) => rules,
        Err(RulesError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "No rules file found, applying defaults");
            CurbRules::empty()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load rules, applying defaults");
            CurbRules::empty()
        }
    }
}

/// Loader bound to a rules file path.
pub struct RulesLoader {
    rules_path: String,
}

impl RulesLoader {
    /// Create a new loader.
    pub fn new(rules_path: impl Into<String>) -> Self {
        RulesLoader {
            rules_path: rules_path.into(),
        }
    }

    /// Load the rules document.
    pub fn load(&self) -> Result<CurbRules, RulesError> {
        load_rules(&self.rules_path)
    }

    /// Load the rules document, falling back to the empty configuration.
    pub fn load_or_default(&self) -> CurbRules {
        load_rules_or_default(&self.rules_path)
    }

    /// Get the rules file path.
    pub fn rules_path(&self) -> &str {
        &self.rules_path
    }
}
