use super::normalize_key;
use crate::errors::ImpactError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Viewpoint selecting which insight rules apply. Carries no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StakeholderView {
    Airline,
    Lessor,
    Financier,
    MroProvider,
}

impl StakeholderView {
    pub const ALL: [StakeholderView; 4] = [
        Self::Airline,
        Self::Lessor,
        Self::Financier,
        Self::MroProvider,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Airline => "Airline",
            Self::Lessor => "Lessor",
            Self::Financier => "Financier",
            Self::MroProvider => "MRO Provider",
        }
    }
}

impl fmt::Display for StakeholderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StakeholderView {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).replace(' ', "-").as_str() {
            "airline" => Ok(Self::Airline),
            "lessor" => Ok(Self::Lessor),
            "financier" => Ok(Self::Financier),
            "mro-provider" | "mroprovider" | "mro" => Ok(Self::MroProvider),
            _ => Err(ImpactError::invalid_category("stakeholder", s)),
        }
    }
}

impl TryFrom<String> for StakeholderView {
    type Error = ImpactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StakeholderView> for String {
    fn from(value: StakeholderView) -> Self {
        value.label().to_string()
    }
}
