use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AlertDetail, SystemId, SystemSnapshot};
use super::provider::{
    AccountProfile, AlertRecord, AlertStatus, ProviderError, SystemRecord, TelemetryProvider,
};
use super::scoring::{
    HealthAssessment, MaintenancePlan, MaintenancePlanSummary, ScoringConfig, ScoringEngine,
};
use super::validation::{SnapshotGuard, SnapshotViolation};

const RECENT_ALERT_CAP: usize = 5;

/// Service composing the telemetry provider, snapshot guard, and scoring
/// engine. Holds no mutable state; concurrent calls need no coordination.
pub struct MonitoringService<P> {
    provider: Arc<P>,
    guard: SnapshotGuard,
    engine: Arc<ScoringEngine>,
}

impl<P> MonitoringService<P>
where
    P: TelemetryProvider + 'static,
{
    pub fn new(provider: Arc<P>, config: ScoringConfig) -> Self {
        Self {
            provider,
            guard: SnapshotGuard,
            engine: Arc::new(ScoringEngine::new(config)),
        }
    }

    /// Account profile plus the raw system listing.
    pub fn configuration(&self) -> Result<ConfigurationView, ServiceError> {
        let account = self.provider.account()?;
        let systems = self.provider.systems()?;
        Ok(ConfigurationView { account, systems })
    }

    /// Detail record for one system, defaulting to the first listed.
    pub fn system_details(
        &self,
        requested: Option<SystemId>,
    ) -> Result<SystemDetailsView, ServiceError> {
        let system = self.resolve_system(requested)?;
        Ok(SystemDetailsView {
            generated_at: Utc::now(),
            system,
        })
    }

    /// Current production summary for one system.
    pub fn current_production(
        &self,
        requested: Option<SystemId>,
    ) -> Result<ProductionView, ServiceError> {
        let system = self.resolve_system(requested)?;
        let summary = self.provider.production_summary(&system.system_id)?;
        Ok(ProductionView {
            system_id: system.system_id,
            generated_at: Utc::now(),
            summary,
        })
    }

    /// Alert listing with open/total counts and a bounded recent sample.
    pub fn system_alerts(&self, requested: Option<SystemId>) -> Result<AlertsView, ServiceError> {
        let system = self.resolve_system(requested)?;
        let alerts = self.provider.alerts(&system.system_id)?;
        let active_alerts = alerts
            .iter()
            .filter(|alert| alert.status == AlertStatus::Active)
            .count();
        let recent_alerts = alerts.iter().take(RECENT_ALERT_CAP).cloned().collect();
        Ok(AlertsView {
            system_id: system.system_id,
            generated_at: Utc::now(),
            total_alerts: alerts.len(),
            active_alerts,
            recent_alerts,
            alerts,
        })
    }

    /// Assemble, validate, and classify a snapshot for one system.
    pub fn system_health(
        &self,
        requested: Option<SystemId>,
    ) -> Result<HealthReportView, ServiceError> {
        let threshold = self.engine.config().maintenance_threshold_percent;
        let snapshot = self.assemble_snapshot(requested, threshold)?;
        let assessment = self.engine.health_assessment(&snapshot);
        tracing::debug!(
            system_id = %snapshot.system_id,
            status = assessment.status.label(),
            "classified system health"
        );
        Ok(HealthReportView {
            system_id: snapshot.system_id.clone(),
            generated_at: Utc::now(),
            active_alerts: snapshot.active_alert_count,
            assessment,
        })
    }

    /// Assemble, validate, and plan maintenance for one system.
    pub fn maintenance_insights(
        &self,
        requested: Option<SystemId>,
        threshold_percent: Option<f64>,
    ) -> Result<MaintenanceReportView, ServiceError> {
        let threshold = threshold_percent
            .unwrap_or(self.engine.config().maintenance_threshold_percent);
        let snapshot = self.assemble_snapshot(requested, threshold)?;
        let plan = self.engine.maintenance_plan_with_threshold(&snapshot, threshold);
        let summary = plan.summary(&snapshot);
        tracing::debug!(
            system_id = %snapshot.system_id,
            priority_score = plan.priority_score,
            overall_priority = plan.overall_priority.label(),
            "built maintenance plan"
        );
        Ok(MaintenanceReportView {
            system_id: snapshot.system_id.clone(),
            generated_at: Utc::now(),
            threshold_percent: threshold,
            plan,
            summary,
        })
    }

    /// Validate and score a caller-assembled snapshot, bypassing the
    /// provider entirely. Backs ad-hoc scoring (CLI report, POST endpoint).
    pub fn score_snapshot(
        &self,
        snapshot: &SystemSnapshot,
        threshold_percent: Option<f64>,
    ) -> Result<(HealthAssessment, MaintenancePlan), ServiceError> {
        self.guard.check(snapshot)?;
        let threshold = threshold_percent
            .unwrap_or(self.engine.config().maintenance_threshold_percent);
        let assessment = self.engine.health_assessment(snapshot);
        let plan = self.engine.maintenance_plan_with_threshold(snapshot, threshold);
        Ok((assessment, plan))
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    fn resolve_system(&self, requested: Option<SystemId>) -> Result<SystemRecord, ServiceError> {
        let systems = self.provider.systems()?;
        match requested {
            Some(id) => systems
                .into_iter()
                .find(|system| system.system_id == id)
                .ok_or(ServiceError::Provider(ProviderError::UnknownSystem(id))),
            None => systems.into_iter().next().ok_or(ServiceError::NoSystems),
        }
    }

    fn assemble_snapshot(
        &self,
        requested: Option<SystemId>,
        threshold_percent: f64,
    ) -> Result<SystemSnapshot, ServiceError> {
        let system = self.resolve_system(requested)?;
        let summary = self.provider.production_summary(&system.system_id)?;
        let alerts = self.provider.alerts(&system.system_id)?;
        let panels = self
            .provider
            .underperforming_panels(&system.system_id, threshold_percent)?;

        let active: Vec<&AlertRecord> = alerts
            .iter()
            .filter(|alert| alert.status == AlertStatus::Active)
            .collect();

        let snapshot = SystemSnapshot {
            system_id: system.system_id.clone(),
            power_rating_watts: system.power_rating_watts.unwrap_or(0.0),
            current_power_watts: summary.current_power_watts.unwrap_or(0.0),
            active_alert_count: active.len() as u32,
            underperforming_panel_count: panels.len() as u32,
            average_system_efficiency_percent: summary.average_efficiency_percent,
            underperforming_panels: panels.iter().map(|panel| panel.panel_id.clone()).collect(),
            alert_details: active
                .iter()
                .map(|alert| AlertDetail {
                    alert_id: alert.alert_id.clone(),
                    title: alert.title.clone(),
                    raised_at: alert.raised_at,
                })
                .collect(),
        };

        self.guard.check(&snapshot)?;
        Ok(snapshot)
    }
}

/// Error raised by the monitoring service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("no systems found for this account")]
    NoSystems,
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotViolation),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NoSystems => StatusCode::NOT_FOUND,
            ServiceError::Provider(ProviderError::UnknownSystem(_)) => StatusCode::NOT_FOUND,
            ServiceError::Provider(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Snapshot(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Account + system listing (the pass-through configuration view).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationView {
    pub account: AccountProfile,
    pub systems: Vec<SystemRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemDetailsView {
    pub generated_at: DateTime<Utc>,
    pub system: SystemRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionView {
    pub system_id: SystemId,
    pub generated_at: DateTime<Utc>,
    pub summary: super::provider::ProductionSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsView {
    pub system_id: SystemId,
    pub generated_at: DateTime<Utc>,
    pub total_alerts: usize,
    pub active_alerts: usize,
    pub recent_alerts: Vec<AlertRecord>,
    pub alerts: Vec<AlertRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReportView {
    pub system_id: SystemId,
    pub generated_at: DateTime<Utc>,
    pub active_alerts: u32,
    pub assessment: HealthAssessment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceReportView {
    pub system_id: SystemId,
    pub generated_at: DateTime<Utc>,
    pub threshold_percent: f64,
    pub plan: MaintenancePlan,
    pub summary: MaintenancePlanSummary,
}
