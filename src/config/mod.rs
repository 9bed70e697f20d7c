use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Curb analysis service configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "curbr")]
#[command(about = "Curbside vehicle legality decision engine")]
pub struct Config {
    /// HTTP server listen address
    #[arg(long, default_value = "0.0.0.0:8080", env = "CURBR_LISTEN_ADDR")]
    pub listen_addr: String,

    /// Path to curb rules YAML file
    #[arg(long, default_value = "config/curb_rules.yaml", env = "CURBR_RULES_PATH")]
    pub rules_path: PathBuf,

    /// Rules reload check interval in seconds
    #[arg(long, default_value = "30", env = "CURBR_RULES_RELOAD_SECS")]
    pub rules_reload_secs: u64,

    /// Latency budget in milliseconds for analysis endpoints
    #[arg(long, default_value = "100", env = "CURBR_LATENCY_BUDGET_MS")]
    pub latency_budget_ms: u64,

    /// Nominal curb segment capacity for the occupancy ratio
    #[arg(long, default_value = "20", env = "CURBR_CURB_CAPACITY")]
    pub curb_capacity: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Enable graceful shutdown
    #[arg(long, default_value = "true", env = "CURBR_GRACEFUL_SHUTDOWN")]
    pub graceful_shutdown: bool,

    /// Graceful shutdown timeout in seconds
    #[arg(long, default_value = "30", env = "CURBR_SHUTDOWN_TIMEOUT_SECS")]
    pub shutdown_timeout_secs: u64,
}

impl Config {
    /// Get rules reload interval as Duration.
    pub fn rules_reload_interval(&self) -> Duration {
        Duration::from_secs(self.rules_reload_secs)
    }

    /// Get shutdown timeout as Duration.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: "0.0.0.0:8080".to_string(),
            rules_path: PathBuf::from("config/curb_rules.yaml"),
            rules_reload_secs: 30,
            latency_budget_ms: 100,
            curb_capacity: 20,
            log_level: "info".to_string(),
            graceful_shutdown: true,
            shutdown_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.latency_budget_ms, 100);
        assert_eq!(config.curb_capacity, 20);
    }

    #[test]
    fn test_duration_helpers() {
        let config = Config {
            rules_reload_secs: 60,
            shutdown_timeout_secs: 15,
            ..Default::default()
        };

        assert_eq!(config.rules_reload_interval(), Duration::from_secs(60));
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(15));
    }
}
