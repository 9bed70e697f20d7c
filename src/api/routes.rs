use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::analytics::occupancy_rate_with_capacity;
use crate::observability::metrics::TimingGuard;
use crate::observability::MetricsRegistry;
use crate::rules::RulesEngine;

use super::request::{AnalyzeRequest, ZonedAnalyzeRequest};
use super::response::{AnalyzeResponse, HealthResponse, ReadyResponse};

/// Shared application state.
pub struct AppState {
    /// Current rules engine (updated via watch channel)
    pub engine_rx: watch::Receiver<Arc<RulesEngine>>,

    /// Metrics registry
    pub metrics: Arc<MetricsRegistry>,

    /// Application start time
    pub start_time: Instant,

    /// Application version
    pub version: String,

    /// Latency budget in milliseconds for analysis endpoints
    pub latency_budget_ms: u64,

    /// Nominal curb capacity for the occupancy ratio
    pub curb_capacity: usize,
}

/// Create the application router.
///
/// CORS is permissive because the dashboard runs in the browser.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/analyze", post(handle_analyze))
        .route("/v1/analyze/zoned", post(handle_analyze_zoned))
        .route("/health", get(handle_health))
        .route("/ready", get(handle_ready))
        .route("/metrics", get(handle_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle batch analysis over structured observations.
async fn handle_analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let start = Instant::now();
    let _timing = TimingGuard::new(&state.metrics);

    let engine = state.engine_rx.borrow().clone();

    let decisions: Vec<_> = req
        .observations
        .iter()
        .map(|obs| engine.evaluate(&req.frame, obs))
        .collect();

    for decision in &decisions {
        state.metrics.record_decision(decision.status);
    }

    let occupancy = occupancy_rate_with_capacity(&req.observations, state.curb_capacity);

    check_latency_budget(&state, &req.frame.frame_id, start);

    info!(
        frame_id = %req.frame.frame_id,
        observations = req.observations.len(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Analysis completed"
    );

    (
        StatusCode::OK,
        Json(AnalyzeResponse::new(req.frame.frame_id, occupancy, decisions)),
    )
}

/// Handle batch analysis where observations carry zone assignments.
async fn handle_analyze_zoned(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ZonedAnalyzeRequest>,
) -> impl IntoResponse {
    let start = Instant::now();
    let _timing = TimingGuard::new(&state.metrics);

    let engine = state.engine_rx.borrow().clone();

    let decisions: Vec<_> = req
        .assignments
        .iter()
        .map(|a| engine.evaluate_with_zone(&req.frame, &a.observation, a.zone.as_ref()))
        .collect();

    for decision in &decisions {
        state.metrics.record_decision(decision.status);
    }

    let observations: Vec<_> = req
        .assignments
        .iter()
        .map(|a| a.observation.clone())
        .collect();
    let occupancy = occupancy_rate_with_capacity(&observations, state.curb_capacity);

    check_latency_budget(&state, &req.frame.frame_id, start);

    info!(
        frame_id = %req.frame.frame_id,
        assignments = req.assignments.len(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Zoned analysis completed"
    );

    (
        StatusCode::OK,
        Json(AnalyzeResponse::new(req.frame.frame_id, occupancy, decisions)),
    )
}

fn check_latency_budget(state: &AppState, frame_id: &str, start: Instant) {
    let elapsed = start.elapsed();
    if elapsed.as_millis() > state.latency_budget_ms as u128 {
        warn!(
            frame_id = frame_id,
            latency_ms = elapsed.as_millis() as u64,
            budget_ms = state.latency_budget_ms,
            "Analysis latency exceeded budget"
        );
    }
}

/// Health check endpoint.
async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let engine = state.engine_rx.borrow().clone();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        rules_version: engine.rules().version.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Readiness check endpoint.
///
/// An empty rules document is a valid all-defaults configuration, so
/// readiness only requires that an engine has been published.
async fn handle_ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let engine = state.engine_rx.borrow().clone();

    (
        StatusCode::OK,
        Json(ReadyResponse {
            ready: true,
            rules_version: engine.rules().version.clone(),
            dwell_limit_entries: engine.rules().limit_entries(),
        }),
    )
}

/// Metrics endpoint (Prometheus format).
async fn handle_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        state.metrics.to_prometheus(),
    )
}
