//! Economic impact of aircraft MRO downtime.
//!
//! Converts downtime, utilisation, lease and labor parameters into a cost
//! breakdown, models residual value decay by aircraft vintage, and renders
//! stakeholder-specific insights.
//!
//! ```rust
//! use mroimpact::{
//!     compute_costs, generate_insights, CostParameters, StakeholderView, VintageCategory,
//! };
//!
//! let params = CostParameters {
//!     duration_days: 18.0,
//!     lease_rate_monthly: 35_000.0,
//!     lost_revenue_per_flight_hour: 21_180.77,
//!     avg_daily_utilization_hours: 12.0,
//!     labor_rate_per_hour: 105.0,
//!     vintage: VintageCategory::MidLife,
//! };
//! let costs = compute_costs(&params)?;
//! let insights = generate_insights(StakeholderView::Financier, &costs, params.duration_days)?;
//! assert_eq!(insights.len(), 3);
//! # Ok::<(), mroimpact::ImpactError>(())
//! ```

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod economics;
pub mod errors;
pub mod formatting;
pub mod insights;
pub mod io;
pub mod observability;
pub mod prediction;

// Re-export commonly used types
pub use crate::core::{
    labor_rate_for_region, CostBreakdown, CostParameters, Region, RegionInput, StakeholderView,
    VintageCategory, VintageProfile,
};

pub use crate::economics::{compute_costs, residual_loss, residual_loss_curve, ResidualLossCurve};

pub use crate::insights::{generate_insights, Insight, InsightList, InsightTone};

pub use crate::prediction::{AircraftProfile, DurationPredictor, FixedDurationPredictor};

pub use crate::chart::{build_chart_data, ChartData};

pub use crate::errors::{ImpactError, ImpactResult};
