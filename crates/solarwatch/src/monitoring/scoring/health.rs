use super::super::domain::{HealthStatus, SystemSnapshot};
use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Health classification plus the operator guidance derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub status: HealthStatus,
    pub efficiency_percent: f64,
    pub recommendations: Vec<String>,
}

pub(crate) fn classify(snapshot: &SystemSnapshot, config: &ScoringConfig) -> HealthAssessment {
    let alerts = snapshot.active_alert_count;
    let efficiency = super::effective_efficiency(snapshot);

    // Ordered first-match table. The alert-free rows run before the
    // alert-tolerant Fair row, which fixes the tie-break at the band
    // boundaries.
    let rows = [
        (
            alerts == 0 && efficiency > config.excellent_efficiency,
            HealthStatus::Excellent,
        ),
        (
            alerts == 0 && efficiency > config.good_efficiency,
            HealthStatus::Good,
        ),
        (
            alerts <= config.fair_alert_limit && efficiency > config.fair_efficiency,
            HealthStatus::Fair,
        ),
    ];

    let status = rows
        .iter()
        .find(|(matched, _)| *matched)
        .map(|(_, status)| *status)
        .unwrap_or(HealthStatus::NeedsAttention);

    let mut recommendations = Vec::new();
    if efficiency < config.advisory_efficiency {
        recommendations
            .push("System efficiency is below optimal - consider maintenance check".to_string());
    }
    if alerts > 0 {
        recommendations.push(format!("Address {alerts} active alerts"));
    }
    if recommendations.is_empty() {
        recommendations.push("System is performing well".to_string());
    }

    HealthAssessment {
        status,
        efficiency_percent: efficiency,
        recommendations,
    }
}
