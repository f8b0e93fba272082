//! Configuration validation that reports every problem at once.

use super::core::ImpactConfig;
use crate::errors::{ensure_non_negative, ImpactError};

/// Validate the entire config, accumulating all errors instead of failing
/// at the first one.
pub fn validate_config(config: &ImpactConfig) -> Vec<ImpactError> {
    let financial = &config.financial;
    let checks = [
        ("lease_rate_monthly", Some(financial.lease_rate_monthly)),
        (
            "lost_revenue_per_flight_hour",
            Some(financial.lost_revenue_per_flight_hour),
        ),
        (
            "avg_daily_utilization_hours",
            Some(financial.avg_daily_utilization_hours),
        ),
        ("labor_rate_per_hour", financial.labor_rate_per_hour),
        (
            "fixed_duration_days",
            Some(config.prediction.fixed_duration_days),
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| ensure_non_negative(field, v)))
        .filter_map(Result::err)
        .collect()
}

/// Fail-fast wrapper returning all messages in one error.
pub fn validate_config_result(config: &ImpactConfig) -> anyhow::Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }
    let summary = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    anyhow::bail!("{} configuration error(s): {}", errors.len(), summary)
}
