use super::domain::SystemSnapshot;

/// Validation errors raised by the snapshot guard.
///
/// Counts are `u32` throughout the snapshot, so negative counts cannot reach
/// this layer; only the floating-point fields need checking.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapshotViolation {
    #[error("{field} must be finite, found {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, found {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Guard rejecting malformed snapshots before they reach the scoring engine.
///
/// A zero power rating is NOT a violation — the engine substitutes 1 W when
/// deriving efficiency. Anything non-finite or negative is a caller contract
/// breach and fails the whole call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotGuard;

impl SnapshotGuard {
    pub fn check(&self, snapshot: &SystemSnapshot) -> Result<(), SnapshotViolation> {
        check_field("power_rating_watts", snapshot.power_rating_watts)?;
        check_field("current_power_watts", snapshot.current_power_watts)?;
        if let Some(average) = snapshot.average_system_efficiency_percent {
            check_field("average_system_efficiency_percent", average)?;
        }
        Ok(())
    }
}

fn check_field(field: &'static str, value: f64) -> Result<(), SnapshotViolation> {
    if !value.is_finite() {
        return Err(SnapshotViolation::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(SnapshotViolation::Negative { field, value });
    }
    Ok(())
}
