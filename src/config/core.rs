use crate::cli::OutputFormat;
use crate::core::{Region, RegionInput, StakeholderView, VintageCategory};
use crate::prediction::{AircraftProfile, DEFAULT_PREDICTED_DURATION_DAYS};
use serde::{Deserialize, Serialize};

/// Root configuration structure, read from `.mroimpact.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImpactConfig {
    /// Aircraft and MRO location
    #[serde(default)]
    pub aircraft: AircraftConfig,

    /// Lease, revenue and utilisation figures
    #[serde(default)]
    pub financial: FinancialConfig,

    /// Duration predictor settings
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Report defaults
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    #[serde(default = "default_age_years")]
    pub age_years: u32,

    #[serde(default = "default_cumulative_flight_cycles")]
    pub cumulative_flight_cycles: u64,

    /// Explicit vintage bin; derived from `age_years` when absent
    #[serde(default)]
    pub vintage: Option<VintageCategory>,

    /// Unknown names are kept and priced at the default labor rate
    #[serde(default = "default_region")]
    pub region: RegionInput,

    #[serde(default = "default_aircraft_type")]
    pub aircraft_type: String,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            age_years: default_age_years(),
            cumulative_flight_cycles: default_cumulative_flight_cycles(),
            vintage: Some(VintageCategory::MidLife),
            region: default_region(),
            aircraft_type: default_aircraft_type(),
        }
    }
}

impl AircraftConfig {
    pub fn vintage(&self) -> VintageCategory {
        self.vintage
            .unwrap_or_else(|| VintageCategory::for_age(self.age_years))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialConfig {
    #[serde(default = "default_lease_rate_monthly")]
    pub lease_rate_monthly: f64,

    #[serde(default = "default_lost_revenue_per_flight_hour")]
    pub lost_revenue_per_flight_hour: f64,

    #[serde(default = "default_avg_daily_utilization_hours")]
    pub avg_daily_utilization_hours: f64,

    /// Overrides the regional labor rate table
    #[serde(default)]
    pub labor_rate_per_hour: Option<f64>,
}

impl Default for FinancialConfig {
    fn default() -> Self {
        Self {
            lease_rate_monthly: default_lease_rate_monthly(),
            lost_revenue_per_flight_hour: default_lost_revenue_per_flight_hour(),
            avg_daily_utilization_hours: default_avg_daily_utilization_hours(),
            labor_rate_per_hour: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionConfig {
    #[serde(default = "default_fixed_duration_days")]
    pub fixed_duration_days: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            fixed_duration_days: default_fixed_duration_days(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub default_format: OutputFormat,

    #[serde(default = "default_stakeholder")]
    pub stakeholder: StakeholderView,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            stakeholder: default_stakeholder(),
        }
    }
}

impl ImpactConfig {
    pub fn aircraft_profile(&self) -> AircraftProfile {
        AircraftProfile {
            age_years: self.aircraft.age_years,
            cumulative_flight_cycles: self.aircraft.cumulative_flight_cycles,
            avg_daily_utilization_hours: self.financial.avg_daily_utilization_hours,
            region: self.aircraft.region.clone(),
            aircraft_type: self.aircraft.aircraft_type.clone(),
        }
    }
}

fn default_age_years() -> u32 {
    10
}
fn default_cumulative_flight_cycles() -> u64 {
    12_000
}
fn default_region() -> RegionInput {
    RegionInput::Known(Region::MiddleEast)
}
fn default_aircraft_type() -> String {
    "A320".to_string()
}
fn default_lease_rate_monthly() -> f64 {
    35_000.0
}
fn default_lost_revenue_per_flight_hour() -> f64 {
    21_180.77
}
fn default_avg_daily_utilization_hours() -> f64 {
    12.0
}
fn default_fixed_duration_days() -> f64 {
    DEFAULT_PREDICTED_DURATION_DAYS
}
fn default_format() -> OutputFormat {
    OutputFormat::Terminal
}
fn default_stakeholder() -> StakeholderView {
    StakeholderView::Airline
}
