use crate::infra::{default_scoring_config, StaticTelemetryProvider};
use clap::Args;
use std::sync::Arc;
use solarwatch::error::AppError;
use solarwatch::monitoring::{
    HealthAssessment, MaintenancePlan, MonitoringService, ScoringEngine, ServiceError,
    SnapshotGuard, SystemSnapshot,
};

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Identifier stamped on the ad-hoc snapshot
    #[arg(long, default_value = "cli-system")]
    pub(crate) system_id: String,
    /// Rated DC capacity in watts (0 means unknown)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) power_rating: f64,
    /// Instantaneous DC power in watts
    #[arg(long, default_value_t = 0.0)]
    pub(crate) current_power: f64,
    /// Number of open alerts
    #[arg(long, default_value_t = 0)]
    pub(crate) alerts: u32,
    /// Number of underperforming panels
    #[arg(long, default_value_t = 0)]
    pub(crate) underperforming: u32,
    /// Windowed average efficiency percent, when known
    #[arg(long)]
    pub(crate) average_efficiency: Option<f64>,
    /// Efficiency floor for the maintenance rules
    #[arg(long)]
    pub(crate) threshold_percent: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Efficiency floor for the maintenance rules
    #[arg(long)]
    pub(crate) threshold_percent: Option<f64>,
}

/// Score a snapshot assembled entirely from command-line flags.
pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        system_id,
        power_rating,
        current_power,
        alerts,
        underperforming,
        average_efficiency,
        threshold_percent,
    } = args;

    let mut snapshot = SystemSnapshot::new(system_id);
    snapshot.power_rating_watts = power_rating;
    snapshot.current_power_watts = current_power;
    snapshot.active_alert_count = alerts;
    snapshot.underperforming_panel_count = underperforming;
    snapshot.average_system_efficiency_percent = average_efficiency;

    SnapshotGuard
        .check(&snapshot)
        .map_err(ServiceError::Snapshot)?;

    let engine = ScoringEngine::new(default_scoring_config());
    let threshold =
        threshold_percent.unwrap_or(engine.config().maintenance_threshold_percent);
    let assessment = engine.health_assessment(&snapshot);
    let plan = engine.maintenance_plan_with_threshold(&snapshot, threshold);

    println!("Snapshot report for {}", snapshot.system_id);
    render_assessment(&assessment);
    render_plan(&plan, threshold);

    Ok(())
}

/// Walk the bundled sample fleet through both scoring passes.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let provider = Arc::new(StaticTelemetryProvider::default());
    let service = MonitoringService::new(provider, default_scoring_config());

    let configuration = service.configuration().map_err(AppError::from)?;
    println!(
        "Fleet demo for account {} ({})",
        configuration.account.display_name, configuration.account.account_id
    );

    for system in &configuration.systems {
        println!("\n=== {} ({}) ===", system.name, system.system_id);

        let health = service.system_health(Some(system.system_id.clone()))?;
        render_assessment(&health.assessment);

        let maintenance = service
            .maintenance_insights(Some(system.system_id.clone()), args.threshold_percent)?;
        render_plan(&maintenance.plan, maintenance.threshold_percent);
    }

    Ok(())
}

fn render_assessment(assessment: &HealthAssessment) {
    println!(
        "Health: {} at {:.1}% efficiency",
        assessment.status.label(),
        assessment.efficiency_percent
    );
    for recommendation in &assessment.recommendations {
        println!("- {recommendation}");
    }
}

fn render_plan(plan: &MaintenancePlan, threshold_percent: f64) {
    println!(
        "\nMaintenance (threshold {threshold_percent}%): {} priority, score {}",
        plan.overall_priority.label(),
        plan.priority_score
    );
    for item in &plan.items {
        println!(
            "- [{}] {}: {}",
            item.priority.label(),
            item.category.label(),
            item.issue
        );
        println!("  -> {}", item.recommendation);
        if let Some(entities) = &item.affected_entities {
            println!("  affected: {}", entities.join(", "));
        }
    }
    println!("Next action: {}", plan.next_recommended_action);
}
