//! Rule sets, one per stakeholder.
//!
//! Rules are evaluated in the listed order and build their result in one
//! expression. A conditional rule contributes `None` when its threshold is
//! not crossed.

use super::Insight;
use crate::core::CostBreakdown;
use crate::errors::{ImpactError, ImpactResult};
use crate::formatting::{format_days, format_percent, format_usd};
use im::Vector;

/// Downtime below this many days is flagged as beating the regional norm.
pub const AIRLINE_BENCHMARK_DAYS: f64 = 15.0;

/// Lease cost above which an idle-asset loss is flagged (USD).
pub const LESSOR_LEASE_LOSS_THRESHOLD: f64 = 20_000.0;

/// Net impact above which hedging is suggested (USD).
pub const FINANCIER_HEDGING_THRESHOLD: f64 = 1_000_000.0;

/// Share of the net impact made up of revenue and lease losses.
pub(crate) fn operational_roi(costs: &CostBreakdown) -> ImpactResult<f64> {
    if costs.net_impact() == 0.0 {
        return Err(ImpactError::division_undefined("operational ROI"));
    }
    Ok((costs.lost_revenue() + costs.lease_cost()) / costs.net_impact())
}

/// Labor cost spread evenly over the grounded days.
pub(crate) fn average_daily_labor_cost(
    costs: &CostBreakdown,
    duration_days: f64,
) -> ImpactResult<f64> {
    if duration_days == 0.0 {
        return Err(ImpactError::division_undefined("average daily labor cost"));
    }
    Ok(costs.labor_cost() / duration_days)
}

pub(super) fn airline(costs: &CostBreakdown, days: f64) -> Vector<Insight> {
    collect([
        (costs.lost_revenue() > costs.lease_cost()).then(|| {
            Insight::warning("Revenue losses due to downtime exceed lease losses; focus on uptime.")
        }),
        (days < AIRLINE_BENCHMARK_DAYS).then(|| {
            Insight::observation("Predicted downtime is significantly lower than regional average.")
        }),
        Some(Insight::recommendation(
            "Prioritise MROs with faster TAT to preserve seat revenue.",
        )),
    ])
}

pub(super) fn lessor(costs: &CostBreakdown, days: f64) -> Vector<Insight> {
    collect([
        Some(Insight::observation(format!(
            "Residual value risk is {} due to {} day grounding.",
            format_usd(costs.residual_loss()),
            format_days(days)
        ))),
        (costs.lease_cost() > LESSOR_LEASE_LOSS_THRESHOLD)
            .then(|| Insight::warning("Significant lease cost loss due to idle aircraft.")),
        Some(Insight::recommendation(
            "Quick turnaround enhances long-term asset value.",
        )),
    ])
}

pub(super) fn financier(costs: &CostBreakdown) -> ImpactResult<Vector<Insight>> {
    let roi = operational_roi(costs)?;
    Ok(collect([
        Some(Insight::observation(format!(
            "Operational ROI based on downtime is approximately {}.",
            format_percent(roi)
        ))),
        Some(Insight::recommendation(
            "Residual value loss is amortizable across remaining lease horizon.",
        )),
        (costs.net_impact() > FINANCIER_HEDGING_THRESHOLD)
            .then(|| Insight::warning("Consider risk hedging on high-value asset exposure.")),
    ]))
}

pub(super) fn mro_provider(costs: &CostBreakdown, days: f64) -> ImpactResult<Vector<Insight>> {
    let daily_labor = average_daily_labor_cost(costs, days)?;
    Ok(collect([
        Some(Insight::recommendation(
            "Predicted TAT is lower than regional peers; competitive edge.",
        )),
        Some(Insight::observation(format!(
            "Average labor cost per day: {}",
            format_usd(daily_labor)
        ))),
        Some(Insight::recommendation(
            "Scope to reduce material markup by efficient procurement.",
        )),
    ]))
}

fn collect<const N: usize>(rules: [Option<Insight>; N]) -> Vector<Insight> {
    rules.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scenario_costs() -> CostBreakdown {
        CostBreakdown::from_components(
            4_575_046.32,
            21_000.0,
            18_900.0,
            5_670.0,
            1_373_530.034_372_18,
        )
    }

    fn messages(insights: &Vector<Insight>) -> Vec<String> {
        insights.iter().map(|i| i.message.clone()).collect()
    }

    #[test]
    fn test_airline_all_rules_fire() {
        let insights = airline(&scenario_costs(), 10.0);
        assert_eq!(
            messages(&insights),
            vec![
                "Revenue losses due to downtime exceed lease losses; focus on uptime.",
                "Predicted downtime is significantly lower than regional average.",
                "Prioritise MROs with faster TAT to preserve seat revenue.",
            ]
        );
    }

    #[test]
    fn test_airline_benchmark_is_strict() {
        let insights = airline(&scenario_costs(), 15.0);
        assert_eq!(insights.len(), 2);
    }

    #[test]
    fn test_airline_only_closing_message() {
        let costs = CostBreakdown::from_components(100.0, 100.0, 0.0, 0.0, 0.0);
        let insights = airline(&costs, 20.0);
        assert_eq!(
            messages(&insights),
            vec!["Prioritise MROs with faster TAT to preserve seat revenue."]
        );
    }

    #[test]
    fn test_lessor_reports_residual_risk() {
        let insights = lessor(&scenario_costs(), 18.0);
        assert_eq!(
            messages(&insights),
            vec![
                "Residual value risk is $1,373,530 due to 18 day grounding.",
                "Significant lease cost loss due to idle aircraft.",
                "Quick turnaround enhances long-term asset value.",
            ]
        );
    }

    #[test]
    fn test_lessor_threshold_is_strict() {
        let costs = CostBreakdown::from_components(0.0, 20_000.0, 0.0, 0.0, 0.0);
        assert_eq!(lessor(&costs, 17.0).len(), 2);
    }

    #[test]
    fn test_financier_roi_and_hedging() {
        let costs = CostBreakdown::from_components(
            4_575_046.32,
            21_000.0,
            18_900.0,
            5_670.0,
            1_373_530.034_372_18,
        );
        let roi = operational_roi(&costs).unwrap();
        assert!((roi - 0.766_755_77).abs() < 1e-6);

        let insights = financier(&costs).unwrap();
        assert_eq!(
            messages(&insights),
            vec![
                "Operational ROI based on downtime is approximately 76.68%.",
                "Residual value loss is amortizable across remaining lease horizon.",
                "Consider risk hedging on high-value asset exposure.",
            ]
        );
    }

    #[test]
    fn test_financier_small_exposure_skips_hedging() {
        let costs = CostBreakdown::from_components(500_000.0, 100.0, 100.0, 30.0, 1_000.0);
        assert_eq!(financier(&costs).unwrap().len(), 2);
    }

    #[test]
    fn test_financier_zero_net_impact_is_undefined() {
        let costs = CostBreakdown::from_components(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            financier(&costs).unwrap_err(),
            ImpactError::DivisionUndefined {
                quantity: "operational ROI"
            }
        );
    }

    #[test]
    fn test_mro_provider_daily_labor() {
        let insights = mro_provider(&scenario_costs(), 18.0).unwrap();
        assert_eq!(
            messages(&insights),
            vec![
                "Predicted TAT is lower than regional peers; competitive edge.",
                "Average labor cost per day: $1,050",
                "Scope to reduce material markup by efficient procurement.",
            ]
        );
    }

    #[test]
    fn test_average_daily_labor_cost() {
        assert_eq!(average_daily_labor_cost(&scenario_costs(), 18.0), Ok(1_050.0));
        assert_eq!(
            average_daily_labor_cost(&scenario_costs(), 0.0),
            Err(ImpactError::DivisionUndefined {
                quantity: "average daily labor cost"
            })
        );
    }

    #[test]
    fn test_mro_provider_zero_duration_is_undefined() {
        let err = mro_provider(&scenario_costs(), 0.0).unwrap_err();
        assert_eq!(err.code(), "E030");
    }
}
