use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for monitored systems.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemId(pub String);

impl SystemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptor for one open alert, carried through the snapshot so reports can
/// surface a bounded sample of the raw records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDetail {
    pub alert_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raised_at: Option<DateTime<Utc>>,
}

/// Normalized telemetry/alert data for one system at one point in time.
///
/// The adapter assembles this from whatever the provider could retrieve;
/// fields it could not obtain arrive as `0`/`None` rather than blocking the
/// engine. A non-positive `power_rating_watts` is treated as 1 W when
/// deriving efficiency — a documented degenerate fallback, not a silent
/// correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub system_id: SystemId,
    #[serde(default)]
    pub power_rating_watts: f64,
    #[serde(default)]
    pub current_power_watts: f64,
    #[serde(default)]
    pub active_alert_count: u32,
    #[serde(default)]
    pub underperforming_panel_count: u32,
    #[serde(default)]
    pub average_system_efficiency_percent: Option<f64>,
    #[serde(default)]
    pub underperforming_panels: Vec<String>,
    #[serde(default)]
    pub alert_details: Vec<AlertDetail>,
}

impl SystemSnapshot {
    /// Minimal snapshot carrying only the numeric signals the engine scores.
    pub fn new(system_id: impl Into<String>) -> Self {
        Self {
            system_id: SystemId(system_id.into()),
            power_rating_watts: 0.0,
            current_power_watts: 0.0,
            active_alert_count: 0,
            underperforming_panel_count: 0,
            average_system_efficiency_percent: None,
            underperforming_panels: Vec::new(),
            alert_details: Vec::new(),
        }
    }
}

/// Overall health classification, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl HealthStatus {
    pub const fn label(self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::NeedsAttention => "Needs Attention",
        }
    }
}

/// Coarse priority used both per maintenance item and for the overall plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl MaintenancePriority {
    pub const fn label(self) -> &'static str {
        match self {
            MaintenancePriority::Low => "Low",
            MaintenancePriority::Medium => "Medium",
            MaintenancePriority::High => "High",
            MaintenancePriority::Critical => "Critical",
        }
    }
}

/// Buckets a maintenance item belongs to, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceCategory {
    #[serde(rename = "Panel Performance")]
    PanelPerformance,
    #[serde(rename = "System Efficiency")]
    SystemEfficiency,
    #[serde(rename = "System Alerts")]
    SystemAlerts,
    #[serde(rename = "Preventive Maintenance")]
    PreventiveMaintenance,
}

impl MaintenanceCategory {
    pub const fn label(self) -> &'static str {
        match self {
            MaintenanceCategory::PanelPerformance => "Panel Performance",
            MaintenanceCategory::SystemEfficiency => "System Efficiency",
            MaintenanceCategory::SystemAlerts => "System Alerts",
            MaintenanceCategory::PreventiveMaintenance => "Preventive Maintenance",
        }
    }
}
