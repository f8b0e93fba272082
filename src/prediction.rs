//! Duration prediction seam.
//!
//! Downtime is currently supplied by the operator, so the only predictor
//! returns a configured constant. Cost calculation never depends on a
//! concrete predictor: callers ask a `dyn DurationPredictor` for the
//! duration and pass the number on.

use crate::core::RegionInput;
use crate::errors::{ensure_non_negative, ImpactResult};
use serde::{Deserialize, Serialize};

/// Default placeholder prediction (days).
pub const DEFAULT_PREDICTED_DURATION_DAYS: f64 = 18.0;

/// Aircraft and operating context a duration model may condition on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub age_years: u32,
    pub cumulative_flight_cycles: u64,
    pub avg_daily_utilization_hours: f64,
    pub region: RegionInput,
    pub aircraft_type: String,
}

/// Estimates MRO downtime for an aircraft.
pub trait DurationPredictor: Send + Sync {
    fn predict_duration(&self, profile: &AircraftProfile) -> ImpactResult<f64>;
}

/// Ignores the profile and returns a fixed number of days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDurationPredictor {
    days: f64,
}

impl FixedDurationPredictor {
    pub fn new(days: f64) -> ImpactResult<Self> {
        let days = ensure_non_negative("fixed_duration_days", days)?;
        Ok(Self { days })
    }
}

impl Default for FixedDurationPredictor {
    fn default() -> Self {
        Self {
            days: DEFAULT_PREDICTED_DURATION_DAYS,
        }
    }
}

impl DurationPredictor for FixedDurationPredictor {
    fn predict_duration(&self, _profile: &AircraftProfile) -> ImpactResult<f64> {
        Ok(self.days)
    }
}
