use serde::Serialize;

use crate::analytics::{summarize_decisions, DecisionSummary};
use crate::domain::LegalityDecision;

/// Response from a batch analysis.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Frame identifier echoed from the request
    pub frame_id: String,

    /// Share of the curb segment occupied
    pub occupancy_rate: f64,

    /// One decision per observation, in request order
    pub decisions: Vec<LegalityDecision>,

    /// Decision counts per status
    pub summary: DecisionSummary,
}

impl AnalyzeResponse {
    /// Assemble a response, deriving the summary from the decisions.
    pub fn new(
        frame_id: impl Into<String>,
        occupancy_rate: f64,
        decisions: Vec<LegalityDecision>,
    ) -> Self {
        let summary = summarize_decisions(&decisions);

        AnalyzeResponse {
            frame_id: frame_id.into(),
            occupancy_rate,
            decisions,
            summary,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub rules_version: String,
    pub uptime_secs: u64,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub rules_version: String,
    pub dwell_limit_entries: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ErrorResponse::new(message, "BAD_REQUEST")
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        ErrorResponse::new(message, "INTERNAL_ERROR")
    }
}
