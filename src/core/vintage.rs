//! Vintage bins and their residual value decay parameters.

use super::normalize_key;
use crate::errors::ImpactError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age bucket of an aircraft, used to select decay parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VintageCategory {
    New,
    MidLife,
    Old,
}

/// Decay parameters of one vintage bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VintageProfile {
    /// Exponential decay constant `k`, per day
    pub decay_rate: f64,
    /// Fraction of asset value that can be lost at saturation (0-1)
    pub max_loss_fraction: f64,
}

impl VintageCategory {
    pub const ALL: [VintageCategory; 3] = [Self::New, Self::MidLife, Self::Old];

    pub const fn profile(self) -> VintageProfile {
        match self {
            Self::New => VintageProfile {
                decay_rate: 0.05,
                max_loss_fraction: 0.04,
            },
            Self::MidLife => VintageProfile {
                decay_rate: 0.08,
                max_loss_fraction: 0.03,
            },
            Self::Old => VintageProfile {
                decay_rate: 0.12,
                max_loss_fraction: 0.02,
            },
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New (0\u{2013}5 yrs)",
            Self::MidLife => "Mid-life (6\u{2013}15 yrs)",
            Self::Old => "Old (15+ yrs)",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::MidLife => "mid-life",
            Self::Old => "old",
        }
    }

    /// Bin for an aircraft age in years. The 15-year edge belongs to Mid-life.
    pub fn for_age(age_years: u32) -> Self {
        match age_years {
            0..=5 => Self::New,
            6..=15 => Self::MidLife,
            _ => Self::Old,
        }
    }
}

impl fmt::Display for VintageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VintageCategory {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|v| key == normalize_key(v.label()) || key == v.key())
            .or(match key.as_str() {
                "midlife" | "mid" => Some(Self::MidLife),
                _ => None,
            })
            .ok_or_else(|| ImpactError::invalid_category("vintage category", s))
    }
}

impl TryFrom<String> for VintageCategory {
    type Error = ImpactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VintageCategory> for String {
    fn from(value: VintageCategory) -> Self {
        value.label().to_string()
    }
}
