use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use solarwatch::monitoring::{
    AccountProfile, AlertRecord, AlertStatus, PanelReading, ProductionSummary, ProviderError,
    ScoringConfig, SystemId, SystemRecord, TelemetryProvider,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Provider backed by a fixed in-memory fleet.
///
/// Stands in for the upstream telemetry API so the service can be started,
/// demoed, and tested without live credentials.
#[derive(Clone)]
pub(crate) struct StaticTelemetryProvider {
    account: AccountProfile,
    systems: Vec<SystemRecord>,
    summaries: HashMap<String, ProductionSummary>,
    alerts: HashMap<String, Vec<AlertRecord>>,
    panels: HashMap<String, Vec<PanelReading>>,
}

impl Default for StaticTelemetryProvider {
    fn default() -> Self {
        let mut summaries = HashMap::new();
        summaries.insert(
            "site-001".to_string(),
            ProductionSummary {
                current_power_watts: Some(11_300.0),
                energy_today_watt_hours: Some(52_400.0),
                average_efficiency_percent: None,
                last_updated: None,
            },
        );
        summaries.insert(
            "site-002".to_string(),
            ProductionSummary {
                current_power_watts: Some(4_100.0),
                energy_today_watt_hours: Some(18_900.0),
                average_efficiency_percent: None,
                last_updated: None,
            },
        );

        let mut alerts = HashMap::new();
        alerts.insert(
            "site-002".to_string(),
            vec![
                AlertRecord {
                    alert_id: "alert-2041".to_string(),
                    title: "String C undervoltage".to_string(),
                    status: AlertStatus::Active,
                    raised_at: None,
                },
                AlertRecord {
                    alert_id: "alert-2017".to_string(),
                    title: "Cleared arc-fault self test".to_string(),
                    status: AlertStatus::Resolved,
                    raised_at: None,
                },
            ],
        );

        let mut panels = HashMap::new();
        panels.insert(
            "site-002".to_string(),
            vec![
                PanelReading {
                    panel_id: "C-04".to_string(),
                    relative_performance_percent: 64.0,
                },
                PanelReading {
                    panel_id: "C-11".to_string(),
                    relative_performance_percent: 69.5,
                },
            ],
        );

        Self {
            account: AccountProfile {
                account_id: "demo-account".to_string(),
                display_name: "Demo Fleet Operations".to_string(),
                email: Some("ops@demo-fleet.example".to_string()),
            },
            systems: vec![
                SystemRecord {
                    system_id: SystemId("site-001".to_string()),
                    name: "Warehouse Rooftop".to_string(),
                    location: Some("Cedar Rapids, IA".to_string()),
                    power_rating_watts: Some(12_500.0),
                    panel_count: Some(32),
                    commissioned_on: None,
                },
                SystemRecord {
                    system_id: SystemId("site-002".to_string()),
                    name: "Depot Carport".to_string(),
                    location: Some("Ames, IA".to_string()),
                    power_rating_watts: Some(9_000.0),
                    panel_count: Some(24),
                    commissioned_on: None,
                },
            ],
            summaries,
            alerts,
            panels,
        }
    }
}

impl TelemetryProvider for StaticTelemetryProvider {
    fn account(&self) -> Result<AccountProfile, ProviderError> {
        Ok(self.account.clone())
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
        Ok(self
            .alerts
            .get(system_id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    fn underperforming_panels(
        &self,
        system_id: &SystemId,
        _threshold_percent: f64,
    ) -> Result<Vec<PanelReading>, ProviderError> {
        Ok(self
            .panels
            .get(system_id.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}
