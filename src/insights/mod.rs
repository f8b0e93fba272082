//! Stakeholder insight rule engine.
//!
//! Each [`StakeholderView`] owns one rule set. A rule set is a pure function
//! from a [`CostBreakdown`] and downtime to an ordered, immutable list of
//! observations. Nothing is cached: every call evaluates from scratch.

pub mod rules;

use crate::core::{CostBreakdown, StakeholderView};
use crate::errors::{ensure_non_negative, ImpactResult};
use im::Vector;
use serde::Serialize;

/// Presentation hint for an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTone {
    /// A reported figure
    Observation,
    /// A threshold that was crossed
    Warning,
    /// A standing remark closing or accompanying the rule set
    Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub tone: InsightTone,
    pub message: String,
}

impl Insight {
    pub fn observation(message: impl Into<String>) -> Self {
        Self {
            tone: InsightTone::Observation,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            tone: InsightTone::Warning,
            message: message.into(),
        }
    }

    pub fn recommendation(message: impl Into<String>) -> Self {
        Self {
            tone: InsightTone::Recommendation,
            message: message.into(),
        }
    }
}

/// Ordered observations for one stakeholder. Order is narrative priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightList {
    view: StakeholderView,
    insights: Vector<Insight>,
}

impl InsightList {
    pub fn view(&self) -> StakeholderView {
        self.view
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Insight> {
        self.insights.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.insights.iter().map(|i| i.message.as_str()).collect()
    }
}

/// Evaluate the rule set for `view` against a computed breakdown.
pub fn generate_insights(
    view: StakeholderView,
    costs: &CostBreakdown,
    duration_days: f64,
) -> ImpactResult<InsightList> {
    let days = ensure_non_negative("duration_days", duration_days)?;
    let insights = match view {
        StakeholderView::Airline => rules::airline(costs, days),
        StakeholderView::Lessor => rules::lessor(costs, days),
        StakeholderView::Financier => rules::financier(costs)?,
        StakeholderView::MroProvider => rules::mro_provider(costs, days)?,
    };

    tracing::debug!(view = view.label(), count = insights.len(), "Generated insights");

    Ok(InsightList { view, insights })
}
