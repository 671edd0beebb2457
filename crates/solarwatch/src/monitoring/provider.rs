use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::domain::SystemId;

/// Account owning the monitored systems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub account_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One system as listed by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub system_id: SystemId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub power_rating_watts: Option<f64>,
    pub panel_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commissioned_on: Option<NaiveDate>,
}

/// Best-effort production figures for one system.
///
/// `None` marks a field the provider could not retrieve within its own
/// error/retry policy; snapshot assembly maps it to `0`/absent instead of
/// blocking the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub current_power_watts: Option<f64>,
    pub energy_today_watt_hours: Option<f64>,
    pub average_efficiency_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Lifecycle state of a provider alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

/// Alert as reported by the provider; only `Active` records count toward the
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub alert_id: String,
    pub title: String,
    pub status: AlertStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raised_at: Option<DateTime<Utc>>,
}

/// Relative output of one panel over the provider's analysis window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelReading {
    pub panel_id: String,
    pub relative_performance_percent: f64,
}

/// Upstream telemetry abstraction so the service can be exercised without a
/// live account. Time-series rollups stay on this side of the seam: the
/// provider hands back already-summarized figures.
pub trait TelemetryProvider: Send + Sync {
    fn account(&self) -> Result<AccountProfile, ProviderError>;
    fn systems(&self) -> Result<Vec<SystemRecord>, ProviderError>;
    fn production_summary(&self, system_id: &SystemId)
        -> Result<ProductionSummary, ProviderError>;
    fn alerts(&self, system_id: &SystemId) -> Result<Vec<AlertRecord>, ProviderError>;
    fn underperforming_panels(
        &self,
        system_id: &SystemId,
        threshold_percent: f64,
    ) -> Result<Vec<PanelReading>, ProviderError>;
}

/// Error enumeration for provider failures.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("authentication with the telemetry provider failed: {0}")]
    Authentication(String),
    #[error("unknown system '{0}'")]
    UnknownSystem(SystemId),
    #[error("telemetry transport unavailable: {0}")]
    Transport(String),
    #[error("malformed provider payload: {0}")]
    Decode(String),
}
