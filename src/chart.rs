//! Series handed to chart renderers.
//!
//! Three independent series: the five cost slices of one breakdown, the
//! residual loss curve over a fixed window, and the static regional
//! turnaround benchmarks.

use crate::core::{CostBreakdown, Region, VintageCategory};
use crate::economics::{residual_loss_curve, ResidualPoint};
use serde::Serialize;

/// Days covered by the residual loss chart (`0..60`).
pub const RESIDUAL_CURVE_WINDOW_DAYS: u32 = 60;

/// One slice of the cost breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSlice {
    pub label: &'static str,
    pub value: f64,
    /// Fraction of the five-slice total, 0 when the total is 0
    pub share: f64,
    /// Radial offset for exploded pie rendering
    pub pull: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalBenchmark {
    pub region: Region,
    pub avg_tat_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub cost_slices: Vec<CostSlice>,
    pub residual_vintage: VintageCategory,
    pub residual_curve: Vec<ResidualPoint>,
    pub regional_benchmarks: Vec<RegionalBenchmark>,
}

pub fn build_chart_data(costs: &CostBreakdown, vintage: VintageCategory) -> ChartData {
    ChartData {
        cost_slices: cost_slices(costs),
        residual_vintage: vintage,
        residual_curve: residual_loss_curve(vintage, RESIDUAL_CURVE_WINDOW_DAYS)
            .iter()
            .collect(),
        regional_benchmarks: regional_benchmarks(),
    }
}

pub fn cost_slices(costs: &CostBreakdown) -> Vec<CostSlice> {
    let total = costs.net_impact();
    costs
        .components()
        .iter()
        .enumerate()
        .map(|(i, component)| CostSlice {
            label: component.label,
            value: component.value,
            share: if total == 0.0 {
                0.0
            } else {
                component.value / total
            },
            pull: if i < 2 { 0.1 } else { 0.05 },
        })
        .collect()
}

pub fn regional_benchmarks() -> Vec<RegionalBenchmark> {
    Region::ALL
        .into_iter()
        .map(|region| RegionalBenchmark {
            region,
            avg_tat_days: region.benchmark_tat_days(),
        })
        .collect()
}
