//! Solar-fleet monitoring: snapshot domain, scoring engine, provider seam,
//! and the HTTP surface over them.

pub mod domain;
pub mod provider;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AlertDetail, HealthStatus, MaintenanceCategory, MaintenancePriority, SystemId, SystemSnapshot,
};
pub use provider::{
    AccountProfile, AlertRecord, AlertStatus, PanelReading, ProductionSummary, ProviderError,
    SystemRecord, TelemetryProvider,
};
pub use router::monitoring_router;
pub use scoring::{
    HealthAssessment, MaintenanceItem, MaintenancePlan, MaintenancePlanSummary, ScoringConfig,
    ScoringEngine,
};
pub use service::{
    AlertsView, ConfigurationView, HealthReportView, MaintenanceReportView, MonitoringService,
    ProductionView, ServiceError, SystemDetailsView,
};
pub use validation::{SnapshotGuard, SnapshotViolation};
