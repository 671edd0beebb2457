use serde::{Deserialize, Serialize};

/// Thresholds and weights backing both scoring passes.
///
/// Every cutoff the engine consults lives here so tests can override a
/// single dial without rebuilding snapshots. Efficiency values are percents
/// and are compared unclamped (a snapshot can legitimately exceed 100 when
/// the rating is under-specified).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Alert-free systems above this efficiency classify Excellent.
    pub excellent_efficiency: f64,
    /// Alert-free systems above this efficiency classify Good.
    pub good_efficiency: f64,
    /// Systems within the alert limit and above this efficiency classify Fair.
    pub fair_efficiency: f64,
    /// Maximum open alerts tolerated by the Fair classification row.
    pub fair_alert_limit: u32,
    /// Below this efficiency the assessment recommends a maintenance check.
    pub advisory_efficiency: f64,
    /// Default efficiency floor for the maintenance planner.
    pub maintenance_threshold_percent: f64,
    /// Below this efficiency the planner escalates to a High-priority item.
    pub low_efficiency_cutoff: f64,
    /// More underperforming panels than this escalates the panel item to High.
    pub panel_priority_limit: u32,
    /// Score contribution per underperforming panel.
    pub panel_weight: u32,
    /// Score contribution per open alert.
    pub alert_weight: u32,
    /// Score contribution of the High-priority efficiency item.
    pub low_efficiency_weight: u32,
    /// Score contribution of the Medium-priority efficiency item.
    pub reduced_efficiency_weight: u32,
    /// Plan scores above this map to Critical.
    pub critical_score: u32,
    /// Plan scores above this (up to the critical cutoff) map to High.
    pub high_score: u32,
    /// Plan scores above this (up to the high cutoff) map to Medium.
    pub medium_score: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            excellent_efficiency: 80.0,
            good_efficiency: 60.0,
            fair_efficiency: 40.0,
            fair_alert_limit: 2,
            advisory_efficiency: 60.0,
            maintenance_threshold_percent: 85.0,
            low_efficiency_cutoff: 70.0,
            panel_priority_limit: 3,
            panel_weight: 10,
            alert_weight: 15,
            low_efficiency_weight: 50,
            reduced_efficiency_weight: 25,
            critical_score: 100,
            high_score: 50,
            medium_score: 25,
        }
    }
}
