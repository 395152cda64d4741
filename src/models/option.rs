// src/models/option.rs
//! European option scenario description
//!
//! An [`OptionParameters`] value carries everything the closed-form engine
//! needs for one evaluation. It is a plain `Copy` value: sweeps derive a new
//! scenario per axis point with [`OptionParameters::with_value`] instead of
//! mutating a shared one.

use crate::error::{validation::*, PricingError, PricingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar days per year used for day/365 time fractions
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Convert a number of calendar days to a year fraction (day/365)
pub fn years_from_days(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Exercise direction of a European option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[default]
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Accepts `call`/`c` and `put`/`p`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnknownOptionType {
                input: s.to_string(),
            }),
        }
    }
}

/// Numeric fields of [`OptionParameters`]
///
/// Names the offending field in validation errors and selects the varying
/// field of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionField {
    SpotPrice,
    StrikePrice,
    RiskFreeRate,
    TimeToExpiry,
    Volatility,
}

impl OptionField {
    pub const ALL: [OptionField; 5] = [
        OptionField::SpotPrice,
        OptionField::StrikePrice,
        OptionField::RiskFreeRate,
        OptionField::TimeToExpiry,
        OptionField::Volatility,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OptionField::SpotPrice => "spot_price",
            OptionField::StrikePrice => "strike_price",
            OptionField::RiskFreeRate => "risk_free_rate",
            OptionField::TimeToExpiry => "time_to_expiry",
            OptionField::Volatility => "volatility",
        }
    }

    /// Time sweeps run toward maturity and are usually charted with an inverted x-axis.
    pub fn is_time_decay(&self) -> bool {
        matches!(self, OptionField::TimeToExpiry)
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionField {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "spot_price" | "spot" | "s" => Ok(OptionField::SpotPrice),
            "strike_price" | "strike" | "k" => Ok(OptionField::StrikePrice),
            "risk_free_rate" | "rate" | "r" => Ok(OptionField::RiskFreeRate),
            "time_to_expiry" | "time" | "expiry" | "days" | "t" => Ok(OptionField::TimeToExpiry),
            "volatility" | "vol" | "sigma" => Ok(OptionField::Volatility),
            _ => Err(PricingError::UnknownName {
                kind: "option field",
                input: s.to_string(),
            }),
        }
    }
}

/// One fully specified option scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionParameters {
    /// Price of the underlying asset (S)
    pub spot_price: f64,
    /// Exercise price (K)
    pub strike_price: f64,
    /// Annualised continuously compounded risk-free rate (r)
    pub risk_free_rate: f64,
    /// Time to expiry in years (T)
    pub time_to_expiry: f64,
    /// Annualised volatility of the underlying (sigma)
    pub volatility: f64,
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Build and validate a scenario
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        time_to_expiry: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        let params = Self {
            spot_price,
            strike_price,
            risk_free_rate,
            time_to_expiry,
            volatility,
            option_type,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every field against the domain of the formulas.
    ///
    /// Fields are checked in declaration order, so the first offending field
    /// is the one reported.
    pub fn validate(&self) -> PricingResult<()> {
        OptionField::ALL
            .into_iter()
            .try_for_each(|field| self.validate_field(field))
    }

    /// Validate every field except `skipped`, in declaration order.
    ///
    /// Used for a sweep base, whose swept field is replaced point by point.
    pub fn validate_except(&self, skipped: OptionField) -> PricingResult<()> {
        OptionField::ALL
            .into_iter()
            .filter(|field| *field != skipped)
            .try_for_each(|field| self.validate_field(field))
    }

    /// Check a single field: r must be >= 0, every other field > 0.
    pub fn validate_field(&self, field: OptionField) -> PricingResult<()> {
        let value = self.value(field);
        match field {
            OptionField::RiskFreeRate => validate_non_negative(field, value),
            _ => validate_positive(field, value),
        }
    }

    pub fn value(&self, field: OptionField) -> f64 {
        match field {
            OptionField::SpotPrice => self.spot_price,
            OptionField::StrikePrice => self.strike_price,
            OptionField::RiskFreeRate => self.risk_free_rate,
            OptionField::TimeToExpiry => self.time_to_expiry,
            OptionField::Volatility => self.volatility,
        }
    }

    /// Copy of `self` with one field replaced. The result is not validated.
    pub fn with_value(&self, field: OptionField, value: f64) -> Self {
        let mut params = *self;
        match field {
            OptionField::SpotPrice => params.spot_price = value,
            OptionField::StrikePrice => params.strike_price = value,
            OptionField::RiskFreeRate => params.risk_free_rate = value,
            OptionField::TimeToExpiry => params.time_to_expiry = value,
            OptionField::Volatility => params.volatility = value,
        }
        params
    }

    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Copy of `self` expiring in `days` calendar days
    pub fn with_days_to_expiry(&self, days: f64) -> Self {
        self.with_value(OptionField::TimeToExpiry, years_from_days(days))
    }

    pub fn days_to_expiry(&self) -> f64 {
        self.time_to_expiry * DAYS_PER_YEAR
    }
}

impl Default for OptionParameters {
    /// S = 30, K = 50, r = 3%, 250 days, sigma = 30%, call.
    fn default() -> Self {
        Self {
            spot_price: 30.0,
            strike_price: 50.0,
            risk_free_rate: 0.03,
            time_to_expiry: years_from_days(250.0),
            volatility: 0.30,
            option_type: OptionType::Call,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let params = OptionParameters::default();
        assert!(params.validate().is_ok());
        assert!((params.days_to_expiry() - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_reports_first_offending_field() {
        let params = OptionParameters {
            strike_price: 0.0,
            volatility: -1.0,
            ..Default::default()
        };

        match params.validate() {
            Err(PricingError::InvalidParameter { field, value, .. }) => {
                assert_eq!(field, OptionField::StrikePrice);
                assert_eq!(value, 0.0);
            }
            other => panic!("expected strike failure, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate_is_allowed() {
        let params = OptionParameters::default().with_value(OptionField::RiskFreeRate, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_with_value_leaves_other_fields() {
        let base = OptionParameters::default();
        let bumped = base.with_value(OptionField::SpotPrice, 42.0);

        assert_eq!(bumped.spot_price, 42.0);
        for field in OptionField::ALL {
            if field != OptionField::SpotPrice {
                assert_eq!(bumped.value(field), base.value(field));
            }
        }
        assert_eq!(base.spot_price, 30.0);
    }

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("spot".parse::<OptionField>().unwrap(), OptionField::SpotPrice);
        assert_eq!("time-to-expiry".parse::<OptionField>().unwrap(), OptionField::TimeToExpiry);
        assert_eq!("sigma".parse::<OptionField>().unwrap(), OptionField::Volatility);
        assert!("dividend".parse::<OptionField>().is_err());
    }

    #[test]
    fn test_deserialize_partial_scenario() {
        let params: OptionParameters =
            serde_json::from_str(r#"{"spot_price": 100.0, "option_type": "put"}"#).unwrap();
        assert_eq!(params.spot_price, 100.0);
        assert_eq!(params.option_type, OptionType::Put);
        assert_eq!(params.strike_price, 50.0);
    }
}
