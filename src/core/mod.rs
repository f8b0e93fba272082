pub mod region;
pub mod stakeholder;
pub mod types;
pub mod vintage;

pub use region::{
    labor_rate_for_region, Region, RegionInput, DEFAULT_LABOR_RATE_PER_HOUR,
};
pub use stakeholder::StakeholderView;
pub use types::{CostBreakdown, CostComponent, CostParameters};
pub use vintage::{VintageCategory, VintageProfile};

/// Reference asset value used by the residual value model (USD).
pub const AIRCRAFT_VALUE_USD: f64 = 60_000_000.0;

/// Labor hours booked per grounded day.
pub const LABOR_HOURS_PER_DAY: f64 = 10.0;

/// Material cost as a fraction of labor cost.
pub const MATERIAL_RATE: f64 = 0.30;

/// Monthly lease rates are pro-rated over a flat 30-day month.
pub const LEASE_DAYS_PER_MONTH: f64 = 30.0;

/// Lowercase a lookup key and fold en dashes and underscores into hyphens so
/// display labels and short CLI keys compare equal.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' | '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
