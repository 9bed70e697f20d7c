use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::interval;
use tracing::{info, warn};

use super::engine::RulesEngine;
use super::loader::{RulesError, RulesLoader};

/// Watch the rules file for changes and broadcast fresh engines.
///
/// Reloads are keyed on the document's version field; a load error keeps
/// the previously published engine in place.
pub struct RulesWatcher {
    loader: RulesLoader,
    check_interval: Duration,
    last_version: Option<String>,
}

impl RulesWatcher {
    /// Create a new rules watcher.
    pub fn new(loader: RulesLoader, check_interval: Duration) -> Self {
        RulesWatcher {
            loader,
            check_interval,
            last_version: None,
        }
    }

    /// Start watching for rule changes.
    ///
    /// Returns a receiver that yields a new `Arc<RulesEngine>` whenever
    /// the rules document changes version.
    pub fn start(mut self) -> (watch::Receiver<Arc<RulesEngine>>, tokio::task::JoinHandle<()>) {
        let initial_rules = self.loader.load_or_default();
        self.last_version = Some(initial_rules.version.clone());
        info!(version = %initial_rules.version, "Loaded initial curb rules");

        let (tx, rx) = watch::channel(Arc::new(RulesEngine::new(initial_rules)));

        let handle = tokio::spawn(async move {
            let mut interval = interval(self.check_interval);

            loop {
                interval.tick().await;

                match self.check_for_updates(&tx) {
                    Ok(true) => info!("Curb rules reloaded successfully"),
                    Ok(false) => {} // No changes
                    Err(e) => warn!("Error checking for rule updates: {}", e),
                }
            }
        });

        (rx, handle)
    }

    /// Check for rule updates and broadcast if the version changed.
    fn check_for_updates(
        &mut self,
        tx: &watch::Sender<Arc<RulesEngine>>,
    ) -> Result<bool, RulesError> {
        let rules = self.loader.load()?;

        if self.last_version.as_ref() == Some(&rules.version) {
            return Ok(false);
        }

        info!(
            "Curb rules version changed: {:?} -> {}",
            self.last_version, rules.version
        );

        self.last_version = Some(rules.version.clone());
        let _ = tx.send(Arc::new(RulesEngine::new(rules)));

        Ok(true)
    }
}
