use super::super::domain::{
    AlertDetail, MaintenanceCategory, MaintenancePriority, SystemSnapshot,
};
use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Display caps: a plan is a judgment, not a dump of the raw records.
const AFFECTED_ENTITY_CAP: usize = 5;
const ALERT_DETAIL_CAP: usize = 3;

const PREVENTIVE_RECOMMENDATION: &str =
    "System is performing well - continue regular monitoring";

/// One actionable finding, with the measured value embedded in the issue text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceItem {
    pub category: MaintenanceCategory,
    pub priority: MaintenancePriority,
    pub issue: String,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_entities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_details: Option<Vec<AlertDetail>>,
}

/// Ranked maintenance judgment for one system.
///
/// `items` keeps evaluation order (panels, efficiency, alerts), not priority
/// order, and `next_recommended_action` follows the first item regardless of
/// its priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePlan {
    pub items: Vec<MaintenanceItem>,
    pub priority_score: u32,
    pub overall_priority: MaintenancePriority,
    pub next_recommended_action: String,
}

impl MaintenancePlan {
    /// Roll-up block mirrored into API responses.
    pub fn summary(&self, snapshot: &SystemSnapshot) -> MaintenancePlanSummary {
        MaintenancePlanSummary {
            total_issues: self
                .items
                .iter()
                .filter(|item| item.category != MaintenanceCategory::PreventiveMaintenance)
                .count(),
            high_priority_issues: self
                .items
                .iter()
                .filter(|item| item.priority >= MaintenancePriority::High)
                .count(),
            system_efficiency_percent: super::effective_efficiency(snapshot),
            underperforming_panels: snapshot.underperforming_panel_count,
        }
    }
}

/// Counts surfaced alongside the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePlanSummary {
    pub total_issues: usize,
    pub high_priority_issues: usize,
    pub system_efficiency_percent: f64,
    pub underperforming_panels: u32,
}

pub(crate) fn build_plan(
    snapshot: &SystemSnapshot,
    config: &ScoringConfig,
    threshold_percent: f64,
) -> MaintenancePlan {
    let mut items = Vec::new();
    let mut priority_score: u32 = 0;

    let panel_count = snapshot.underperforming_panel_count;
    if panel_count > 0 {
        let priority = if panel_count > config.panel_priority_limit {
            MaintenancePriority::High
        } else {
            MaintenancePriority::Medium
        };
        let affected_entities = if snapshot.underperforming_panels.is_empty() {
            None
        } else {
            Some(
                snapshot
                    .underperforming_panels
                    .iter()
                    .take(AFFECTED_ENTITY_CAP)
                    .cloned()
                    .collect(),
            )
        };
        items.push(MaintenanceItem {
            category: MaintenanceCategory::PanelPerformance,
            priority,
            issue: format!("{panel_count} panels performing below {threshold_percent}%"),
            recommendation:
                "Inspect underperforming panels for soiling, shading, or hardware issues"
                    .to_string(),
            affected_entities,
            alert_details: None,
        });
        priority_score += panel_count * config.panel_weight;
    }

    // The two efficiency bands are mutually exclusive: at most one item per
    // call, and exactly one whenever efficiency sits below the threshold.
    let efficiency = super::effective_efficiency(snapshot);
    if efficiency < threshold_percent {
        if efficiency < config.low_efficiency_cutoff {
            items.push(MaintenanceItem {
                category: MaintenanceCategory::SystemEfficiency,
                priority: MaintenancePriority::High,
                issue: format!("Overall system efficiency at {efficiency:.1}%"),
                recommendation: "Schedule comprehensive system inspection and cleaning"
                    .to_string(),
                affected_entities: None,
                alert_details: None,
            });
            priority_score += config.low_efficiency_weight;
        } else {
            items.push(MaintenanceItem {
                category: MaintenanceCategory::SystemEfficiency,
                priority: MaintenancePriority::Medium,
                issue: format!("System efficiency below optimal at {efficiency:.1}%"),
                recommendation: "Consider panel cleaning and connection inspection".to_string(),
                affected_entities: None,
                alert_details: None,
            });
            priority_score += config.reduced_efficiency_weight;
        }
    }

    let alert_count = snapshot.active_alert_count;
    if alert_count > 0 {
        let alert_details = if snapshot.alert_details.is_empty() {
            None
        } else {
            Some(
                snapshot
                    .alert_details
                    .iter()
                    .take(ALERT_DETAIL_CAP)
                    .cloned()
                    .collect(),
            )
        };
        items.push(MaintenanceItem {
            category: MaintenanceCategory::SystemAlerts,
            priority: MaintenancePriority::High,
            issue: format!("{alert_count} active system alerts"),
            recommendation: "Address active alerts immediately".to_string(),
            affected_entities: None,
            alert_details,
        });
        priority_score += alert_count * config.alert_weight;
    }

    if items.is_empty() {
        items.push(MaintenanceItem {
            category: MaintenanceCategory::PreventiveMaintenance,
            priority: MaintenancePriority::Low,
            issue: "No outstanding maintenance issues detected".to_string(),
            recommendation: PREVENTIVE_RECOMMENDATION.to_string(),
            affected_entities: None,
            alert_details: None,
        });
    }

    let overall_priority = if priority_score > config.critical_score {
        MaintenancePriority::Critical
    } else if priority_score > config.high_score {
        MaintenancePriority::High
    } else if priority_score > config.medium_score {
        MaintenancePriority::Medium
    } else {
        MaintenancePriority::Low
    };

    let next_recommended_action = items[0].recommendation.clone();

    MaintenancePlan {
        items,
        priority_score,
        overall_priority,
        next_recommended_action,
    }
}
