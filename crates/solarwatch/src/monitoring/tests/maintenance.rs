use super::common::*;
use crate::monitoring::domain::{MaintenanceCategory, MaintenancePriority};

#[test]
fn clean_system_gets_single_preventive_item_with_zero_score() {
    let plan = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 0, 0));

    assert_eq!(plan.items.len(), 1);
    assert_eq!(
        plan.items[0].category,
        MaintenanceCategory::PreventiveMaintenance
    );
    assert_eq!(plan.items[0].priority, MaintenancePriority::Low);
    assert_eq!(plan.priority_score, 0);
    assert_eq!(plan.overall_priority, MaintenancePriority::Low);
    assert_eq!(
        plan.next_recommended_action,
        "System is performing well - continue regular monitoring"
    );
}

#[test]
fn degraded_system_fires_all_three_rules_in_evaluation_order() {
    // 500/1000 W = 50% efficiency, 1 alert, 5 underperforming panels.
    let plan = engine()
        .maintenance_plan_with_threshold(&snapshot(1_000.0, 500.0, 1, 5), 85.0);

    let categories: Vec<_> = plan.items.iter().map(|item| item.category).collect();
    assert_eq!(
        categories,
        vec![
            MaintenanceCategory::PanelPerformance,
            MaintenanceCategory::SystemEfficiency,
            MaintenanceCategory::SystemAlerts,
        ]
    );

    // 5 panels * 10 + 50 (efficiency below 70) + 1 alert * 15.
    assert_eq!(plan.priority_score, 115);
    assert_eq!(plan.overall_priority, MaintenancePriority::Critical);
    assert_eq!(
        plan.next_recommended_action,
        "Inspect underperforming panels for soiling, shading, or hardware issues"
    );
}

#[test]
fn few_panels_rank_medium_many_rank_high() {
    let medium = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 0, 3));
    assert_eq!(medium.items[0].priority, MaintenancePriority::Medium);
    assert_eq!(medium.priority_score, 30);

    let high = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 0, 4));
    assert_eq!(high.items[0].priority, MaintenancePriority::High);
    assert_eq!(high.priority_score, 40);
}

#[test]
fn affected_entities_cap_at_five_panels() {
    let plan = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 0, 8));

    let entities = plan.items[0]
        .affected_entities
        .as_ref()
        .expect("panel identifiers attached");
    assert_eq!(entities.len(), 5);
    assert_eq!(entities[0], "panel-01");
}

#[test]
fn missing_panel_identifiers_leave_entities_unset() {
    let plan = engine().maintenance_plan(&bare_snapshot(1_000.0, 900.0, 0, 2));

    assert_eq!(
        plan.items[0].category,
        MaintenanceCategory::PanelPerformance
    );
    assert!(plan.items[0].affected_entities.is_none());
}

#[test]
fn alert_details_cap_at_three() {
    let plan = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 5, 0));

    let item = plan
        .items
        .iter()
        .find(|item| item.category == MaintenanceCategory::SystemAlerts)
        .expect("alerts item");
    assert_eq!(item.priority, MaintenancePriority::High);
    let details = item.alert_details.as_ref().expect("details attached");
    assert_eq!(details.len(), 3);
}

#[test]
fn exactly_one_efficiency_item_fires_below_threshold() {
    for current in [100.0, 500.0, 699.0, 700.0, 750.0, 849.0] {
        let plan = engine()
            .maintenance_plan_with_threshold(&snapshot(1_000.0, current, 0, 0), 85.0);
        let efficiency_items = plan
            .items
            .iter()
            .filter(|item| item.category == MaintenanceCategory::SystemEfficiency)
            .count();
        assert_eq!(
            efficiency_items, 1,
            "expected one efficiency item at {current} W"
        );
    }

    let plan = engine().maintenance_plan_with_threshold(&snapshot(1_000.0, 850.0, 0, 0), 85.0);
    assert!(plan
        .items
        .iter()
        .all(|item| item.category != MaintenanceCategory::SystemEfficiency));
}

#[test]
fn efficiency_band_boundary_sits_at_the_cutoff() {
    // 69.9% escalates, 70.0% stays at the reduced band.
    let high = engine().maintenance_plan(&snapshot(1_000.0, 699.0, 0, 0));
    assert_eq!(high.items[0].priority, MaintenancePriority::High);
    assert_eq!(high.priority_score, 50);

    let medium = engine().maintenance_plan(&snapshot(1_000.0, 700.0, 0, 0));
    assert_eq!(medium.items[0].priority, MaintenancePriority::Medium);
    assert_eq!(medium.priority_score, 25);
}

#[test]
fn score_is_monotonic_in_alert_count() {
    let mut previous = 0;
    for alerts in 0..6 {
        let plan = engine().maintenance_plan(&snapshot(1_000.0, 900.0, alerts, 0));
        assert!(
            plan.priority_score >= previous,
            "score dropped at {alerts} alerts"
        );
        previous = plan.priority_score;
    }
}

#[test]
fn score_is_monotonic_in_panel_count() {
    let mut previous = 0;
    for panels in 0..6 {
        let plan = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 0, panels));
        assert!(
            plan.priority_score >= previous,
            "score dropped at {panels} panels"
        );
        previous = plan.priority_score;
    }
}

#[test]
fn overall_priority_follows_score_cutoffs() {
    // 25 (one reduced-efficiency item) stays Low; 26+ is Medium.
    let low = engine().maintenance_plan(&snapshot(1_000.0, 750.0, 0, 0));
    assert_eq!(low.priority_score, 25);
    assert_eq!(low.overall_priority, MaintenancePriority::Low);

    let medium = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 2, 0));
    assert_eq!(medium.priority_score, 30);
    assert_eq!(medium.overall_priority, MaintenancePriority::Medium);

    let high = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 4, 0));
    assert_eq!(high.priority_score, 60);
    assert_eq!(high.overall_priority, MaintenancePriority::High);

    let critical = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 7, 0));
    assert_eq!(critical.priority_score, 105);
    assert_eq!(critical.overall_priority, MaintenancePriority::Critical);
}

#[test]
fn custom_threshold_widens_the_efficiency_rule() {
    // 90% efficiency is clean at the default threshold but flagged at 95%.
    let strict = engine()
        .maintenance_plan_with_threshold(&snapshot(1_000.0, 900.0, 0, 0), 95.0);
    assert_eq!(
        strict.items[0].category,
        MaintenanceCategory::SystemEfficiency
    );
    assert_eq!(strict.items[0].priority, MaintenancePriority::Medium);
}

#[test]
fn summary_counts_exclude_the_preventive_fallback() {
    let clean = engine().maintenance_plan(&snapshot(1_000.0, 900.0, 0, 0));
    let summary = clean.summary(&snapshot(1_000.0, 900.0, 0, 0));
    assert_eq!(summary.total_issues, 0);
    assert_eq!(summary.high_priority_issues, 0);

    let degraded_snapshot = snapshot(1_000.0, 500.0, 1, 5);
    let degraded = engine().maintenance_plan_with_threshold(&degraded_snapshot, 85.0);
    let summary = degraded.summary(&degraded_snapshot);
    assert_eq!(summary.total_issues, 3);
    assert_eq!(summary.high_priority_issues, 3);
    assert_eq!(summary.underperforming_panels, 5);
    assert!((summary.system_efficiency_percent - 50.0).abs() < f64::EPSILON);
}

#[test]
fn issue_text_embeds_the_measured_values() {
    let plan = engine()
        .maintenance_plan_with_threshold(&snapshot(1_000.0, 500.0, 2, 4), 85.0);

    assert!(plan.items[0].issue.contains("4 panels performing below 85%"));
    assert!(plan.items[1].issue.contains("50.0%"));
    assert!(plan.items[2].issue.contains("2 active system alerts"));
}

#[test]
fn serialized_plan_uses_display_labels() {
    let plan = engine().maintenance_plan(&snapshot(1_000.0, 500.0, 1, 5));
    let value = serde_json::to_value(&plan).expect("serializes");

    assert_eq!(value["items"][0]["category"], "Panel Performance");
    assert_eq!(value["overall_priority"], "Critical");
    assert_eq!(value["items"][0]["priority"], "High");
}
