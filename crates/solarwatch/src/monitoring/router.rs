use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::SystemId;
use super::provider::TelemetryProvider;
use super::service::{MonitoringService, ServiceError};

/// Router builder exposing the monitoring API.
///
/// Every report route takes an optional `system_id`; omitting it resolves to
/// the first system on the account, matching the provider tooling this
/// service fronts.
pub fn monitoring_router<P>(service: Arc<MonitoringService<P>>) -> Router
where
    P: TelemetryProvider + 'static,
{
    Router::new()
        .route("/api/v1/configuration", get(configuration_handler::<P>))
        .route("/api/v1/system/details", get(details_handler::<P>))
        .route("/api/v1/system/production", get(production_handler::<P>))
        .route("/api/v1/system/alerts", get(alerts_handler::<P>))
        .route("/api/v1/system/health", get(health_handler::<P>))
        .route("/api/v1/system/maintenance", get(maintenance_handler::<P>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SystemQuery {
    pub(crate) system_id: Option<String>,
    pub(crate) threshold_percent: Option<f64>,
}

impl SystemQuery {
    fn system_id(&self) -> Option<SystemId> {
        self.system_id.clone().map(SystemId)
    }
}

pub(crate) async fn configuration_handler<P>(
    State(service): State<Arc<MonitoringService<P>>>,
) -> Response
where
    P: TelemetryProvider + 'static,
{
    match service.configuration() {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn details_handler<P>(
    State(service): State<Arc<MonitoringService<P>>>,
    Query(query): Query<SystemQuery>,
) -> Response
where
    P: TelemetryProvider + 'static,
{
    match service.system_details(query.system_id()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn production_handler<P>(
    State(service): State<Arc<MonitoringService<P>>>,
    Query(query): Query<SystemQuery>,
) -> Response
where
    P: TelemetryProvider + 'static,
{
    match service.current_production(query.system_id()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn alerts_handler<P>(
    State(service): State<Arc<MonitoringService<P>>>,
    Query(query): Query<SystemQuery>,
) -> Response
where
    P: TelemetryProvider + 'static,
{
    match service.system_alerts(query.system_id()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn health_handler<P>(
    State(service): State<Arc<MonitoringService<P>>>,
    Query(query): Query<SystemQuery>,
) -> Response
where
    P: TelemetryProvider + 'static,
{
    match service.system_health(query.system_id()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn maintenance_handler<P>(
    State(service): State<Arc<MonitoringService<P>>>,
    Query(query): Query<SystemQuery>,
) -> Response
where
    P: TelemetryProvider + 'static,
{
    match service.maintenance_insights(query.system_id(), query.threshold_percent) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (error.status_code(), axum::Json(payload)).into_response()
}
