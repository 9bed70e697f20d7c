use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::domain::LegalityStatus;

/// Metrics registry for the application.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Total decisions produced
    pub decisions_total: AtomicU64,

    /// Decisions by status
    pub decisions_legal: AtomicU64,
    pub decisions_likely_illegal: AtomicU64,
    pub decisions_uncertain: AtomicU64,
    pub decisions_in_transit: AtomicU64,

    /// Batch latency buckets (microseconds)
    pub latency_under_1ms: AtomicU64,
    pub latency_1_5ms: AtomicU64,
    pub latency_5_10ms: AtomicU64,
    pub latency_10_50ms: AtomicU64,
    pub latency_50_100ms: AtomicU64,
    pub latency_over_100ms: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        MetricsRegistry::default()
    }

    /// Record a decision outcome.
    pub fn record_decision(&self, status: LegalityStatus) {
        self.decisions_total.fetch_add(1, Ordering::Relaxed);

        match status {
            LegalityStatus::Legal => {
                self.decisions_legal.fetch_add(1, Ordering::Relaxed);
            }
            LegalityStatus::LikelyIllegal => {
                self.decisions_likely_illegal.fetch_add(1, Ordering::Relaxed);
            }
            LegalityStatus::Uncertain => {
                self.decisions_uncertain.fetch_add(1, Ordering::Relaxed);
            }
            LegalityStatus::InTransit => {
                self.decisions_in_transit.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Record batch latency.
    pub fn record_latency(&self, start: Instant) {
        let micros = start.elapsed().as_micros() as u64;

        if micros < 1000 {
            self.latency_under_1ms.fetch_add(1, Ordering::Relaxed);
        } else if micros < 5000 {
            self.latency_1_5ms.fetch_add(1, Ordering::Relaxed);
        } else if micros < 10000 {
            self.latency_5_10ms.fetch_add(1, Ordering::Relaxed);
        } else if micros < 50000 {
            self.latency_10_50ms.fetch_add(1, Ordering::Relaxed);
        } else if micros < 100000 {
            self.latency_50_100ms.fetch_add(1, Ordering::Relaxed);
        } else {
            self.latency_over_100ms.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Export metrics in Prometheus format.
    pub fn to_prometheus(&self) -> String {
        format!(
            r#"# HELP curbr_decisions_total Total number of legality decisions
# TYPE curbr_decisions_total counter
curbr_decisions_total {}

# HELP curbr_decisions Legality decisions by status
# TYPE curbr_decisions counter
curbr_decisions{{status="legal"}} {}
curbr_decisions{{status="likely_illegal"}} {}
curbr_decisions{{status="uncertain"}} {}
curbr_decisions{{status="in_transit"}} {}

# HELP curbr_batch_latency_bucket Batch analysis latency histogram
# TYPE curbr_batch_latency_bucket counter
curbr_batch_latency_bucket{{le="0.001"}} {}
curbr_batch_latency_bucket{{le="0.005"}} {}
curbr_batch_latency_bucket{{le="0.01"}} {}
curbr_batch_latency_bucket{{le="0.05"}} {}
curbr_batch_latency_bucket{{le="0.1"}} {}
curbr_batch_latency_bucket{{le="+Inf"}} {}
"#,
            self.decisions_total.load(Ordering::Relaxed),
            self.decisions_legal.load(Ordering::Relaxed),
            self.decisions_likely_illegal.load(Ordering::Relaxed),
            self.decisions_uncertain.load(Ordering::Relaxed),
            self.decisions_in_transit.load(Ordering::Relaxed),
            self.latency_under_1ms.load(Ordering::Relaxed),
            self.latency_1_5ms.load(Ordering::Relaxed),
            self.latency_5_10ms.load(Ordering::Relaxed),
            self.latency_10_50ms.load(Ordering::Relaxed),
            self.latency_50_100ms.load(Ordering::Relaxed),
            self.latency_over_100ms.load(Ordering::Relaxed),
        )
    }
}

/// Guard for timing operations.
pub struct TimingGuard<'a> {
    registry: &'a MetricsRegistry,
    start: Instant,
}

impl<'a> TimingGuard<'a> {
    pub fn new(registry: &'a MetricsRegistry) -> Self {
        TimingGuard {
            registry,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for TimingGuard<'a> {
    fn drop(&mut self) {
        self.registry.record_latency(self.start);
    }
}
