use super::VintageCategory;
use crate::errors::{ensure_non_negative, ImpactResult};
use serde::{Deserialize, Serialize};

/// Operational and financial inputs for one downtime event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// Days the aircraft is grounded
    pub duration_days: f64,
    /// Monthly lease rate (USD)
    pub lease_rate_monthly: f64,
    /// Revenue lost per flight hour not flown (USD)
    pub lost_revenue_per_flight_hour: f64,
    /// Average flight hours per day in service
    pub avg_daily_utilization_hours: f64,
    /// MRO labor rate (USD/hr)
    pub labor_rate_per_hour: f64,
    pub vintage: VintageCategory,
}

impl CostParameters {
    /// Reject negative, NaN and infinite inputs.
    pub fn validate(&self) -> ImpactResult<()> {
        ensure_non_negative("duration_days", self.duration_days)?;
        ensure_non_negative("lease_rate_monthly", self.lease_rate_monthly)?;
        ensure_non_negative(
            "lost_revenue_per_flight_hour",
            self.lost_revenue_per_flight_hour,
        )?;
        ensure_non_negative(
            "avg_daily_utilization_hours",
            self.avg_daily_utilization_hours,
        )?;
        ensure_non_negative("labor_rate_per_hour", self.labor_rate_per_hour)?;
        Ok(())
    }
}

/// One named cost magnitude, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostComponent {
    pub label: &'static str,
    pub value: f64,
}

/// Cost components of one downtime event and their exact sum.
///
/// Built only through [`CostBreakdown::from_components`], so `net_impact`
/// always equals the sum of the five components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    lost_revenue: f64,
    lease_cost: f64,
    labor_cost: f64,
    material_cost: f64,
    residual_loss: f64,
    net_impact: f64,
}

impl CostBreakdown {
    pub fn from_components(
        lost_revenue: f64,
        lease_cost: f64,
        labor_cost: f64,
        material_cost: f64,
        residual_loss: f64,
    ) -> Self {
        Self {
            lost_revenue,
            lease_cost,
            labor_cost,
            material_cost,
            residual_loss,
            net_impact: lost_revenue + lease_cost + labor_cost + material_cost + residual_loss,
        }
    }

    pub fn lost_revenue(&self) -> f64 {
        self.lost_revenue
    }

    pub fn lease_cost(&self) -> f64 {
        self.lease_cost
    }

    pub fn labor_cost(&self) -> f64 {
        self.labor_cost
    }

    pub fn material_cost(&self) -> f64 {
        self.material_cost
    }

    pub fn residual_loss(&self) -> f64 {
        self.residual_loss
    }

    pub fn net_impact(&self) -> f64 {
        self.net_impact
    }

    pub fn components(&self) -> [CostComponent; 5] {
        [
            CostComponent {
                label: "Lost Revenue",
                value: self.lost_revenue,
            },
            CostComponent {
                label: "Lease Cost",
                value: self.lease_cost,
            },
            CostComponent {
                label: "Labor",
                value: self.labor_cost,
            },
            CostComponent {
                label: "Materials",
                value: self.material_cost,
            },
            CostComponent {
                label: "Residual Value Loss",
                value: self.residual_loss,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parameters() -> CostParameters {
        CostParameters {
            duration_days: 18.0,
            lease_rate_monthly: 35_000.0,
            lost_revenue_per_flight_hour: 21_180.77,
            avg_daily_utilization_hours: 12.0,
            labor_rate_per_hour: 105.0,
            vintage: VintageCategory::MidLife,
        }
    }

    #[test]
    fn test_validate_accepts_zero_duration() {
        let params = CostParameters {
            duration_days: 0.0,
            ..sample_parameters()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_fields() {
        let params = CostParameters {
            labor_rate_per_hour: -1.0,
            ..sample_parameters()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("labor_rate_per_hour"));
    }

    #[test]
    fn test_net_impact_is_sum_of_components() {
        let breakdown = CostBreakdown::from_components(1.5, 2.25, 3.0, 0.9, 10.0);
        assert_eq!(breakdown.net_impact(), 1.5 + 2.25 + 3.0 + 0.9 + 10.0);
    }

    #[test]
    fn test_components_order() {
        let breakdown = CostBreakdown::from_components(1.0, 2.0, 3.0, 4.0, 5.0);
        let labels: Vec<_> = breakdown.components().iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["Lost Revenue", "Lease Cost", "Labor", "Materials", "Residual Value Loss"]
        );
        let values: Vec<_> = breakdown.components().iter().map(|c| c.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_parameters_deserialize_rejects_unknown_vintage() {
        let json = r#"{
            "duration_days": 18.0,
            "lease_rate_monthly": 35000.0,
            "lost_revenue_per_flight_hour": 21180.77,
            "avg_daily_utilization_hours": 12.0,
            "labor_rate_per_hour": 105.0,
            "vintage": "Vintage (40+ yrs)"
        }"#;
        let err = serde_json::from_str::<CostParameters>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown vintage category"));
    }
}
