//! MRO regions: labor rate lookup and turnaround benchmarks.

use super::normalize_key;
use crate::errors::ImpactError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Labor rate applied when a region name is not recognised (USD/hr).
pub const DEFAULT_LABOR_RATE_PER_HOUR: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    MiddleEast,
    EastAsia,
    SeAsia,
    Usa,
}

impl Region {
    pub const ALL: [Region; 4] = [Self::MiddleEast, Self::EastAsia, Self::SeAsia, Self::Usa];

    pub const fn label(self) -> &'static str {
        match self {
            Self::MiddleEast => "Middle East",
            Self::EastAsia => "East Asia",
            Self::SeAsia => "SE Asia",
            Self::Usa => "USA",
        }
    }

    /// Regional MRO labor rate (USD/hr).
    pub const fn labor_rate_per_hour(self) -> f64 {
        match self {
            Self::MiddleEast => 95.0,
            Self::EastAsia => 105.0,
            Self::SeAsia => 75.0,
            Self::Usa => 130.0,
        }
    }

    /// Industry-average MRO turnaround for the region (days). Static
    /// reference data for comparison charts.
    pub const fn benchmark_tat_days(self) -> u32 {
        match self {
            Self::MiddleEast => 14,
            Self::EastAsia => 18,
            Self::SeAsia => 22,
            Self::Usa => 19,
        }
    }
}

/// Labor rate for a free-form region name, falling back to
/// [`DEFAULT_LABOR_RATE_PER_HOUR`] for anything unrecognised.
pub fn labor_rate_for_region(name: &str) -> f64 {
    name.parse::<Region>()
        .map(Region::labor_rate_per_hour)
        .unwrap_or(DEFAULT_LABOR_RATE_PER_HOUR)
}

/// Region as entered by the operator.
///
/// Names outside [`Region`] are kept as entered: they price labor at
/// [`DEFAULT_LABOR_RATE_PER_HOUR`] and have no turnaround benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionInput {
    Known(Region),
    Other(String),
}

impl RegionInput {
    pub fn known(&self) -> Option<Region> {
        match self {
            Self::Known(region) => Some(*region),
            Self::Other(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Known(region) => region.label(),
            Self::Other(name) => name.as_str(),
        }
    }

    pub fn labor_rate_per_hour(&self) -> f64 {
        labor_rate_for_region(self.label())
    }
}

impl From<Region> for RegionInput {
    fn from(region: Region) -> Self {
        Self::Known(region)
    }
}

impl From<String> for RegionInput {
    fn from(value: String) -> Self {
        match value.parse::<Region>() {
            Ok(region) => Self::Known(region),
            Err(_) => Self::Other(value.trim().to_string()),
        }
    }
}

impl From<RegionInput> for String {
    fn from(value: RegionInput) -> Self {
        match value {
            RegionInput::Known(region) => region.label().to_string(),
            RegionInput::Other(name) => name,
        }
    }
}

impl FromStr for RegionInput {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for RegionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s).replace(' ', "-");
        match key.as_str() {
            "middle-east" => Ok(Self::MiddleEast),
            "east-asia" => Ok(Self::EastAsia),
            "se-asia" | "southeast-asia" => Ok(Self::SeAsia),
            "usa" | "us" => Ok(Self::Usa),
            _ => Err(ImpactError::invalid_category("region", s)),
        }
    }
}

impl TryFrom<String> for Region {
    type Error = ImpactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(value: Region) -> Self {
        value.label().to_string()
    }
}
