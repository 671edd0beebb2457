use crate::cli::ServeArgs;
use crate::infra::{default_scoring_config, AppState, StaticTelemetryProvider};
use crate::routes::with_monitoring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use solarwatch::config::AppConfig;
use solarwatch::error::AppError;
use solarwatch::monitoring::MonitoringService;
use solarwatch::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let provider = Arc::new(StaticTelemetryProvider::default());
    let monitoring_service = Arc::new(MonitoringService::new(provider, default_scoring_config()));

    let app = with_monitoring_routes(monitoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "solar monitoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
