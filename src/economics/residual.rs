//! Residual value decay model.
//!
//! Value lost while grounded follows bounded exponential saturation:
//!
//! ```text
//! loss(t) = aircraft_value * max_loss_fraction * (1 - e^(-k * t))
//! ```
//!
//! `loss(0) = 0`, the curve rises strictly with `t` and approaches
//! `aircraft_value * max_loss_fraction` from below.

use crate::core::{VintageCategory, VintageProfile, AIRCRAFT_VALUE_USD};
use crate::errors::{ensure_non_negative, ImpactResult};
use serde::Serialize;
use std::ops::Range;

impl VintageProfile {
    /// Saturation ceiling of the residual loss (USD).
    pub fn max_residual_loss(&self) -> f64 {
        AIRCRAFT_VALUE_USD * self.max_loss_fraction
    }

    /// Residual loss after `days` of downtime. Callers validate `days`.
    pub fn residual_loss_at(&self, days: f64) -> f64 {
        self.max_residual_loss() * -(-self.decay_rate * days).exp_m1()
    }
}

/// Residual value lost after `duration_days` grounded for the given vintage.
pub fn residual_loss(vintage: VintageCategory, duration_days: f64) -> ImpactResult<f64> {
    let days = ensure_non_negative("duration_days", duration_days)?;
    Ok(vintage.profile().residual_loss_at(days))
}

/// Visualization series of `(day, loss)` for `day` in `0..max_days`.
///
/// The returned value is cheap to hold and can be iterated any number of
/// times; every pass recomputes the points.
pub fn residual_loss_curve(vintage: VintageCategory, max_days: u32) -> ResidualLossCurve {
    ResidualLossCurve {
        vintage,
        max_days,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResidualPoint {
    pub day: u32,
    pub residual_loss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidualLossCurve {
    vintage: VintageCategory,
    max_days: u32,
}

impl ResidualLossCurve {
    pub fn vintage(&self) -> VintageCategory {
        self.vintage
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    pub fn iter(&self) -> ResidualLossPoints {
        ResidualLossPoints {
            profile: self.vintage.profile(),
            days: 0..self.max_days,
        }
    }
}

impl IntoIterator for ResidualLossCurve {
    type Item = ResidualPoint;
    type IntoIter = ResidualLossPoints;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &ResidualLossCurve {
    type Item = ResidualPoint;
    type IntoIter = ResidualLossPoints;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct ResidualLossPoints {
    profile: VintageProfile,
    days: Range<u32>,
}

impl Iterator for ResidualLossPoints {
    type Item = ResidualPoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.days.next().map(|day| ResidualPoint {
            day,
            residual_loss: self.profile.residual_loss_at(f64::from(day)),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.days.size_hint()
    }
}

impl ExactSizeIterator for ResidualLossPoints {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_has_no_loss() {
        for vintage in VintageCategory::ALL {
            assert_eq!(residual_loss(vintage, 0.0), Ok(0.0));
        }
    }

    #[test]
    fn test_mid_life_at_eighteen_days() {
        let loss = residual_loss(VintageCategory::MidLife, 18.0).unwrap();
        let expected = 60_000_000.0 * 0.03 * (1.0 - (-0.08_f64 * 18.0).exp());
        assert!((loss - expected).abs() < 1e-6);
        assert!((loss - 1_373_530.034).abs() < 0.01);
    }

    #[test]
    fn test_loss_is_bounded_by_ceiling() {
        for vintage in VintageCategory::ALL {
            let ceiling = vintage.profile().max_residual_loss();
            let far = residual_loss(vintage, 10_000.0).unwrap();
            assert!(far <= ceiling);
            assert!((ceiling - far) / ceiling < 1e-9);
        }
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let err = residual_loss(VintageCategory::New, -1.0).unwrap_err();
        assert_eq!(err.category(), "InvalidParameter");
    }

    #[test]
    fn test_higher_decay_rate_loses_more_at_fixed_time() {
        let slow = VintageProfile {
            decay_rate: 0.05,
            max_loss_fraction: 0.03,
        };
        let fast = VintageProfile {
            decay_rate: 0.12,
            ..slow
        };
        let deeper = VintageProfile {
            max_loss_fraction: 0.04,
            ..slow
        };
        assert!(fast.residual_loss_at(10.0) > slow.residual_loss_at(10.0));
        assert!(deeper.residual_loss_at(10.0) > slow.residual_loss_at(10.0));
    }

    #[test]
    fn test_curve_covers_window() {
        let curve = residual_loss_curve(VintageCategory::Old, 60);
        let points: Vec<_> = curve.iter().collect();
        assert_eq!(points.len(), 60);
        assert_eq!(points[0].day, 0);
        assert_eq!(points[0].residual_loss, 0.0);
        assert_eq!(points[59].day, 59);
        assert_eq!(
            points[59].residual_loss,
            residual_loss(VintageCategory::Old, 59.0).unwrap()
        );
    }

    #[test]
    fn test_curve_is_restartable() {
        let curve = residual_loss_curve(VintageCategory::New, 30);
        let first: Vec<_> = curve.iter().collect();
        let second: Vec<_> = (&curve).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(curve.iter().len(), 30);
    }

    #[test]
    fn test_empty_curve() {
        assert_eq!(residual_loss_curve(VintageCategory::New, 0).iter().count(), 0);
    }
}
