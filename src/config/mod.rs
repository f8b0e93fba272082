mod core;
mod loader;
pub mod validation;

pub use self::core::{AircraftConfig, FinancialConfig, ImpactConfig, OutputConfig, PredictionConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use validation::{validate_config, validate_config_result};

/// Commented template written by `mroimpact init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# mroimpact configuration

[aircraft]
age_years = 10
cumulative_flight_cycles = 12000
# One of "New (0–5 yrs)", "Mid-life (6–15 yrs)", "Old (15+ yrs)".
# Derived from age_years when omitted.
vintage = "Mid-life (6–15 yrs)"
# "Middle East", "East Asia", "SE Asia" or "USA"; any other name is
# priced at the default labor rate of 100 USD/hr
region = "Middle East"
aircraft_type = "A320"

[financial]
lease_rate_monthly = 35000.0
lost_revenue_per_flight_hour = 21180.77
avg_daily_utilization_hours = 12.0
# labor_rate_per_hour = 100.0  # overrides the regional rate

[prediction]
fixed_duration_days = 18.0

[output]
default_format = "terminal"
stakeholder = "Airline"
"#;
