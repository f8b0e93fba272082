//! Cost breakdown calculator.

use crate::core::{
    CostBreakdown, CostParameters, LABOR_HOURS_PER_DAY, LEASE_DAYS_PER_MONTH, MATERIAL_RATE,
};
use crate::errors::ImpactResult;
use tracing::debug;

/// Convert one downtime event into its cost components.
///
/// All components are computed together; invalid input yields an error and
/// never a partially populated breakdown.
///
/// - lost revenue: revenue per flight hour x daily utilisation x days
/// - lease: monthly rate pro-rated over a flat 30-day month
/// - labor: days x 10 labor hours x hourly rate
/// - materials: 30% of labor
/// - residual: residual value decay at `duration_days` for the vintage
pub fn compute_costs(params: &CostParameters) -> ImpactResult<CostBreakdown> {
    params.validate()?;

    let days = params.duration_days;
    let lost_revenue = lost_revenue(
        params.lost_revenue_per_flight_hour,
        params.avg_daily_utilization_hours,
        days,
    );
    let lease_cost = lease_cost(params.lease_rate_monthly, days);
    let labor_cost = labor_cost(params.labor_rate_per_hour, days);
    let material_cost = MATERIAL_RATE * labor_cost;
    let residual_loss = params.vintage.profile().residual_loss_at(days);

    let breakdown = CostBreakdown::from_components(
        lost_revenue,
        lease_cost,
        labor_cost,
        material_cost,
        residual_loss,
    );

    debug!(
        duration_days = days,
        vintage = params.vintage.key(),
        net_impact = breakdown.net_impact(),
        "Computed cost breakdown"
    );

    Ok(breakdown)
}

fn lost_revenue(per_flight_hour: f64, daily_utilization: f64, days: f64) -> f64 {
    per_flight_hour * daily_utilization * days
}

fn lease_cost(monthly_rate: f64, days: f64) -> f64 {
    (monthly_rate / LEASE_DAYS_PER_MONTH) * days
}

fn labor_cost(rate_per_hour: f64, days: f64) -> f64 {
    days * LABOR_HOURS_PER_DAY * rate_per_hour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VintageCategory;
    use crate::errors::ImpactError;

    fn scenario() -> CostParameters {
        CostParameters {
            duration_days: 18.0,
            lease_rate_monthly: 35_000.0,
            lost_revenue_per_flight_hour: 21_180.77,
            avg_daily_utilization_hours: 12.0,
            labor_rate_per_hour: 105.0,
            vintage: VintageCategory::MidLife,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_scenario() {
        let costs = compute_costs(&scenario()).unwrap();

        assert_close(costs.lost_revenue(), 4_575_046.32);
        assert_close(costs.lease_cost(), 21_000.0);
        assert_close(costs.labor_cost(), 18_900.0);
        assert_close(costs.material_cost(), 5_670.0);
        assert!((costs.residual_loss() - 1_373_530.034).abs() < 0.01);
        assert!((costs.net_impact() - 5_994_146.354).abs() < 0.01);
    }

    #[test]
    fn test_zero_duration_is_all_zero() {
        let params = CostParameters {
            duration_days: 0.0,
            ..scenario()
        };
        let costs = compute_costs(&params).unwrap();
        for component in costs.components() {
            assert_eq!(component.value, 0.0, "{}", component.label);
        }
        assert_eq!(costs.net_impact(), 0.0);
    }

    #[test]
    fn test_lease_is_prorated_over_thirty_days() {
        let params = CostParameters {
            duration_days: 30.0,
            ..scenario()
        };
        assert_close(compute_costs(&params).unwrap().lease_cost(), 35_000.0);
    }

    #[test]
    fn test_negative_duration_fails() {
        let params = CostParameters {
            duration_days: -3.0,
            ..scenario()
        };
        assert!(matches!(
            compute_costs(&params),
            Err(ImpactError::InvalidParameter {
                field: "duration_days",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_lease_rate_fails() {
        let params = CostParameters {
            lease_rate_monthly: -35_000.0,
            ..scenario()
        };
        assert!(compute_costs(&params).is_err());
    }

    #[test]
    fn test_material_is_thirty_percent_of_labor() {
        let costs = compute_costs(&scenario()).unwrap();
        assert_eq!(costs.material_cost(), 0.30 * costs.labor_cost());
    }

    #[test]
    fn test_repeated_evaluation_is_bit_identical() {
        let a = compute_costs(&scenario()).unwrap();
        let b = compute_costs(&scenario()).unwrap();
        assert_eq!(a.net_impact().to_bits(), b.net_impact().to_bits());
        assert_eq!(a, b);
    }
}
