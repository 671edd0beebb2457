use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use solarwatch::error::AppError;
use solarwatch::monitoring::{
    monitoring_router, HealthAssessment, MaintenancePlan, MaintenancePlanSummary,
    MonitoringService, ScoringEngine, ServiceError, SnapshotGuard, SystemId, SystemSnapshot,
    TelemetryProvider,
};

use crate::infra::default_scoring_config;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    #[serde(flatten)]
    pub(crate) snapshot: SystemSnapshot,
    #[serde(default)]
    pub(crate) threshold_percent: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) system_id: SystemId,
    pub(crate) threshold_percent: f64,
    pub(crate) assessment: HealthAssessment,
    pub(crate) plan: MaintenancePlan,
    pub(crate) summary: MaintenancePlanSummary,
}

pub(crate) fn with_monitoring_routes<P>(service: Arc<MonitoringService<P>>) -> axum::Router
where
    P: TelemetryProvider + 'static,
{
    monitoring_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assessments",
            axum::routing::post(assessment_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Score a caller-assembled snapshot without touching the provider, for
/// hosts that aggregate telemetry themselves.
pub(crate) async fn assessment_endpoint(
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let AssessmentRequest {
        snapshot,
        threshold_percent,
    } = payload;

    SnapshotGuard
        .check(&snapshot)
        .map_err(ServiceError::Snapshot)?;

    let engine = ScoringEngine::new(default_scoring_config());
    let threshold =
        threshold_percent.unwrap_or(engine.config().maintenance_threshold_percent);
    let assessment = engine.health_assessment(&snapshot);
    let plan = engine.maintenance_plan_with_threshold(&snapshot, threshold);
    let summary = plan.summary(&snapshot);

    Ok(Json(AssessmentResponse {
        system_id: snapshot.system_id.clone(),
        threshold_percent: threshold,
        assessment,
        plan,
        summary,
    }))
}
