use std::collections::HashMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::monitoring::domain::{AlertDetail, SystemId, SystemSnapshot};
use crate::monitoring::provider::{
    AccountProfile, AlertRecord, AlertStatus, PanelReading, ProductionSummary, ProviderError,
    SystemRecord, TelemetryProvider,
};
use crate::monitoring::router::monitoring_router;
use crate::monitoring::scoring::{ScoringConfig, ScoringEngine};
use crate::monitoring::service::MonitoringService;

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(scoring_config())
}

/// Snapshot with derived panel/alert identifiers matching the counts.
pub(super) fn snapshot(rating: f64, current: f64, alerts: u32, panels: u32) -> SystemSnapshot {
    SystemSnapshot {
        system_id: SystemId("sys-001".to_string()),
        power_rating_watts: rating,
        current_power_watts: current,
        active_alert_count: alerts,
        underperforming_panel_count: panels,
        average_system_efficiency_percent: None,
        underperforming_panels: (0..panels).map(|i| format!("panel-{:02}", i + 1)).collect(),
        alert_details: (0..alerts)
            .map(|i| AlertDetail {
                alert_id: format!("alert-{:02}", i + 1),
                title: "Inverter output below expected range".to_string(),
                raised_at: None,
            })
            .collect(),
    }
}

/// Snapshot carrying only the numeric signals, no entity identifiers.
pub(super) fn bare_snapshot(rating: f64, current: f64, alerts: u32, panels: u32) -> SystemSnapshot {
    let mut snapshot = SystemSnapshot::new("sys-001");
    snapshot.power_rating_watts = rating;
    snapshot.current_power_watts = current;
    snapshot.active_alert_count = alerts;
    snapshot.underperforming_panel_count = panels;
    snapshot
}

/// In-memory provider: two systems, the first healthy, the second degraded.
#[derive(Default, Clone)]
pub(super) struct FleetProvider {
    pub(super) systems: Vec<SystemRecord>,
    pub(super) summaries: HashMap<String, ProductionSummary>,
    pub(super) alerts: HashMap<String, Vec<AlertRecord>>,
    pub(super) panels: HashMap<String, Vec<PanelReading>>,
}

impl TelemetryProvider for FleetProvider {
    fn account(&self) -> Result<AccountProfile, ProviderError> {
        Ok(AccountProfile {
            account_id: "acct-42".to_string(),
            display_name: "Prairie Ridge Solar".to_string(),
            email: Some("ops@prairieridge.example".to_string()),
        })
    }

    fn systems(&self) -> Result<Vec<SystemRecord>, ProviderError> {
        Ok(self.systems.clone())
    }

    fn production_summary(
        &self,
        system_id: &SystemId,
    ) -> Result<ProductionSummary, ProviderError> {
        self.summaries
            .get(system_id.as_str())
            .cloned()
            .ok_or_else(|| ProviderError::UnknownSystem(system_id.clone()))
    }

    fn alerts(&self, system_id: &SystemId) -> Result<Vec<AlertRecord>, ProviderError> {
        Ok(self.alerts.get(system_id.as_str()).cloned().unwrap_or_default())
    }

    fn underperforming_panels(
        &self,
        system_id: &SystemId,
        _threshold_percent: f64,
    ) -> Result<Vec<PanelReading>, ProviderError> {
        Ok(self.panels.get(system_id.as_str()).cloned().unwrap_or_default())
    }
}

pub(super) fn system_record(id: &str, name: &str, rating: Option<f64>) -> SystemRecord {
    SystemRecord {
        system_id: SystemId(id.to_string()),
        name: name.to_string(),
        location: Some("Des Moines, IA".to_string()),
        power_rating_watts: rating,
        panel_count: Some(24),
        commissioned_on: None,
    }
}

pub(super) fn fleet_provider() -> FleetProvider {
    let mut provider = FleetProvider {
        systems: vec![
            system_record("sys-001", "North Array", Some(10_000.0)),
            system_record("sys-002", "South Array", Some(8_000.0)),
        ],
        ..FleetProvider::default()
    };

    provider.summaries.insert(
        "sys-001".to_string(),
        ProductionSummary {
            current_power_watts: Some(9_000.0),
            energy_today_watt_hours: Some(41_500.0),
            average_efficiency_percent: None,
            last_updated: None,
        },
    );
    provider.summaries.insert(
        "sys-002".to_string(),
        ProductionSummary {
            current_power_watts: Some(3_600.0),
            energy_today_watt_hours: Some(12_200.0),
            average_efficiency_percent: None,
            last_updated: None,
        },
    );

    provider.alerts.insert(
        "sys-002".to_string(),
        vec![
            alert_record("alert-01", "String B undervoltage", AlertStatus::Active),
            alert_record("alert-02", "Inverter derating", AlertStatus::Active),
            alert_record("alert-03", "Cleared ground fault", AlertStatus::Resolved),
        ],
    );

    provider.panels.insert(
        "sys-002".to_string(),
        vec![
            panel_reading("B-03", 62.0),
            panel_reading("B-04", 68.5),
            panel_reading("B-07", 71.2),
            panel_reading("C-01", 74.9),
        ],
    );

    provider
}

pub(super) fn alert_record(id: &str, title: &str, status: AlertStatus) -> AlertRecord {
    AlertRecord {
        alert_id: id.to_string(),
        title: title.to_string(),
        status,
        raised_at: None,
    }
}

pub(super) fn panel_reading(id: &str, performance: f64) -> PanelReading {
    PanelReading {
        panel_id: id.to_string(),
        relative_performance_percent: performance,
    }
}

/// Provider whose every call fails at the transport layer.
pub(super) struct OfflineProvider;

impl TelemetryProvider for OfflineProvider {
    fn account(&self) -> Result<AccountProfile, ProviderError> {
        Err(ProviderError::Transport("gateway offline".to_string()))
    }

    fn systems(&self) -> Result<Vec<SystemRecord>, ProviderError> {
        Err(ProviderError::Transport("gateway offline".to_string()))
    }

    fn production_summary(
        &self,
        _system_id: &SystemId,
    ) -> Result<ProductionSummary, ProviderError> {
        Err(ProviderError::Transport("gateway offline".to_string()))
    }

    fn alerts(&self, _system_id: &SystemId) -> Result<Vec<AlertRecord>, ProviderError> {
        Err(ProviderError::Transport("gateway offline".to_string()))
    }

    fn underperforming_panels(
        &self,
        _system_id: &SystemId,
        _threshold_percent: f64,
    ) -> Result<Vec<PanelReading>, ProviderError> {
        Err(ProviderError::Transport("gateway offline".to_string()))
    }
}

pub(super) fn build_service() -> MonitoringService<FleetProvider> {
    MonitoringService::new(Arc::new(fleet_provider()), scoring_config())
}

pub(super) fn monitoring_router_with_fleet() -> axum::Router {
    monitoring_router(Arc::new(build_service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
