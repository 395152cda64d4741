// src/error.rs
use crate::models::option::OptionField;
use thiserror::Error;

/// Custom error types for the bsm-greeks library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A scenario field lies outside the domain of the closed-form formulas
    #[error("Invalid parameter '{field}' = {value}: {constraint}")]
    InvalidParameter {
        field: OptionField,
        value: f64,
        constraint: &'static str,
    },

    /// An invalid scenario met while sweeping, tagged with the axis point that produced it
    #[error("Sweep over '{field}' failed at point {index} (value {value}): {source}")]
    InvalidSweepPoint {
        field: OptionField,
        index: usize,
        value: f64,
        #[source]
        source: Box<PricingError>,
    },

    /// A sweep axis that cannot be built from the requested bounds
    #[error("Invalid sweep axis for '{field}': {reason}")]
    InvalidAxis { field: OptionField, reason: String },

    /// Unrecognised option type label
    #[error("Unknown option type '{input}': expected 'call' or 'put'")]
    UnknownOptionType { input: String },

    /// Unrecognised scenario field or metric label
    #[error("Unknown {kind} '{input}'")]
    UnknownName { kind: &'static str, input: String },
}

impl PricingError {
    /// Field whose value triggered the error, looking through sweep wrappers.
    pub fn field(&self) -> Option<OptionField> {
        match self {
            PricingError::InvalidParameter { field, .. } => Some(*field),
            PricingError::InvalidSweepPoint { source, .. } => source.field(),
            PricingError::InvalidAxis { field, .. } => Some(*field),
            PricingError::UnknownOptionType { .. } | PricingError::UnknownName { .. } => None,
        }
    }
}

/// Result type alias for bsm-greeks operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};
    use crate::models::option::OptionField;

    /// Validate that a field is strictly positive and finite.
    ///
    /// NaN fails the check, unlike a plain `value <= 0.0` test.
    pub fn validate_positive(field: OptionField, value: f64) -> PricingResult<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidParameter {
                field,
                value,
                constraint: "must be positive and finite (> 0)",
            })
        }
    }

    /// Validate that a field is non-negative and finite
    pub fn validate_non_negative(field: OptionField, value: f64) -> PricingResult<()> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidParameter {
                field,
                value,
                constraint: "must be non-negative and finite (>= 0)",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(OptionField::Volatility, 0.2).is_ok());
        assert!(validate_positive(OptionField::Volatility, 0.0).is_err());
        assert!(validate_positive(OptionField::Volatility, -0.1).is_err());
        assert!(validate_positive(OptionField::Volatility, f64::NAN).is_err());
        assert!(validate_positive(OptionField::Volatility, f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(OptionField::RiskFreeRate, 0.0).is_ok());
        assert!(validate_non_negative(OptionField::RiskFreeRate, 0.05).is_ok());
        assert!(validate_non_negative(OptionField::RiskFreeRate, -0.01).is_err());
        assert!(validate_non_negative(OptionField::RiskFreeRate, f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = PricingError::InvalidParameter {
            field: OptionField::Volatility,
            value: -0.1,
            constraint: "must be positive and finite (> 0)",
        };

        let display = format!("{}", error);
        assert!(display.contains("volatility"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_sweep_point_error_keeps_cause() {
        let cause = PricingError::InvalidParameter {
            field: OptionField::TimeToExpiry,
            value: 0.0,
            constraint: "must be positive and finite (> 0)",
        };
        let error = PricingError::InvalidSweepPoint {
            field: OptionField::TimeToExpiry,
            index: 3,
            value: 0.0,
            source: Box::new(cause.clone()),
        };

        assert_eq!(error.field(), Some(OptionField::TimeToExpiry));
        assert!(format!("{}", error).contains("point 3"));
        let source = std::error::Error::source(&error).map(|e| e.to_string());
        assert_eq!(source, Some(cause.to_string()));
    }
}
