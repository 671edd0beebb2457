mod config;
mod health;
mod maintenance;

pub use config::ScoringConfig;
pub use health::HealthAssessment;
pub use maintenance::{MaintenanceItem, MaintenancePlan, MaintenancePlanSummary};

use super::domain::SystemSnapshot;

/// Stateless engine applying the configured thresholds to a snapshot.
///
/// Both passes are pure functions of the snapshot and the config; the engine
/// holds no other state and can be shared freely across calls.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Classify overall health and derive operator recommendations.
    pub fn health_assessment(&self, snapshot: &SystemSnapshot) -> HealthAssessment {
        health::classify(snapshot, &self.config)
    }

    /// Build a maintenance plan using the configured efficiency threshold.
    pub fn maintenance_plan(&self, snapshot: &SystemSnapshot) -> MaintenancePlan {
        self.maintenance_plan_with_threshold(snapshot, self.config.maintenance_threshold_percent)
    }

    /// Build a maintenance plan against a caller-supplied efficiency floor.
    pub fn maintenance_plan_with_threshold(
        &self,
        snapshot: &SystemSnapshot,
        threshold_percent: f64,
    ) -> MaintenancePlan {
        maintenance::build_plan(snapshot, &self.config, threshold_percent)
    }
}

/// Efficiency used by both passes: the windowed average when the adapter
/// supplied one, otherwise the instantaneous ratio of current power to the
/// rated capacity. A non-positive rating is treated as 1 W, which yields a
/// large unclamped percentage instead of a division error.
pub(crate) fn effective_efficiency(snapshot: &SystemSnapshot) -> f64 {
    match snapshot.average_system_efficiency_percent {
        Some(average) => average,
        None => {
            let rating = if snapshot.power_rating_watts > 0.0 {
                snapshot.power_rating_watts
            } else {
                1.0
            };
            snapshot.current_power_watts / rating * 100.0
        }
    }
}
