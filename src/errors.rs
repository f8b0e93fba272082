//! Error taxonomy for the economic impact engine.
//!
//! Every engine operation is a pure function over value-typed inputs, so
//! there is no transient failure mode: errors describe inputs that are out
//! of domain and are always reported straight back to the caller.
//!
//! # Error Codes
//!
//! - E010: a numeric input is negative, NaN or infinite
//! - E020: a vintage, region or stakeholder key is not in its closed set
//! - E030: a ratio was requested whose denominator is zero
//!
//! # Example
//!
//! ```rust
//! use mroimpact::errors::ImpactError;
//!
//! let err = ImpactError::invalid_category("vintage", "Ancient (40+ yrs)");
//! assert_eq!(err.code(), "E020");
//! assert_eq!(err.category(), "InvalidCategory");
//! ```

use thiserror::Error;

/// Errors reported by the cost, residual value and insight computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImpactError {
    /// Negative or otherwise out-of-domain numeric input
    #[error("Invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Key outside a closed enumeration
    #[error("Unknown {kind} `{value}`")]
    InvalidCategory { kind: &'static str, value: String },

    /// Ratio with a zero denominator
    #[error("Cannot compute {quantity}: denominator is zero")]
    DivisionUndefined { quantity: &'static str },
}

/// Result alias used across the engine.
pub type ImpactResult<T> = Result<T, ImpactError>;

impl ImpactError {
    pub fn invalid_parameter(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            field,
            value,
            reason,
        }
    }

    pub fn invalid_category(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidCategory {
            kind,
            value: value.into(),
        }
    }

    pub fn division_undefined(quantity: &'static str) -> Self {
        Self::DivisionUndefined { quantity }
    }

    /// Stable code for documentation and programmatic handling.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "E010",
            Self::InvalidCategory { .. } => "E020",
            Self::DivisionUndefined { .. } => "E030",
        }
    }

    /// Get the error category name.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "InvalidParameter",
            Self::InvalidCategory { .. } => "InvalidCategory",
            Self::DivisionUndefined { .. } => "DivisionUndefined",
        }
    }
}

/// Reject negative, NaN and infinite values for a named input.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> ImpactResult<f64> {
    if !value.is_finite() {
        return Err(ImpactError::invalid_parameter(
            field,
            value,
            "must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(ImpactError::invalid_parameter(
            field,
            value,
            "must not be negative",
        ));
    }
    Ok(value)
}
