// src/sweep/axis.rs
//! Sweep axes
//!
//! A [`SweepAxis`] names the varying field and carries its values in the
//! order they should be evaluated. Values are never sorted or deduplicated:
//! a time sweep toward maturity is expressed by passing descending values.

use crate::error::{PricingError, PricingResult};
use crate::models::option::{years_from_days, OptionField, OptionParameters};
use serde::{Deserialize, Serialize};

/// Number of points in the preset price and rate grids
pub const PRESET_POINTS: usize = 100;

/// Longest countdown the time preset will build (100 years of days)
pub const MAX_PRESET_DAYS: u32 = 36_500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub field: OptionField,
    pub values: Vec<f64>,
}

impl SweepAxis {
    pub fn new(field: OptionField, values: Vec<f64>) -> Self {
        Self { field, values }
    }

    /// `points` evenly spaced values from `start` to `end`, both inclusive.
    ///
    /// `start > end` gives a descending axis.
    pub fn linspace(field: OptionField, start: f64, end: f64, points: usize) -> PricingResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PricingError::InvalidAxis {
                field,
                reason: format!("bounds must be finite, got [{}, {}]", start, end),
            });
        }
        let values = match points {
            0 => {
                return Err(PricingError::InvalidAxis {
                    field,
                    reason: "at least one point is required".to_string(),
                })
            }
            1 => vec![start],
            n => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                    .collect()
            }
        };
        Ok(Self { field, values })
    }

    /// Time-to-expiry axis counting down from `max_days` to one day, in years
    pub fn days_to_expiry(max_days: u32) -> Self {
        let values = (1..=max_days)
            .rev()
            .map(|d| years_from_days(d as f64))
            .collect();
        Self::new(OptionField::TimeToExpiry, values)
    }

    /// Whole-number grid `1, 2, ..., points` (spot or strike in currency units)
    pub fn unit_grid(field: OptionField, points: usize) -> Self {
        Self::new(field, (1..=points).map(|i| i as f64).collect())
    }

    /// Default axis for `field`, matching the dashboard's sweep ranges:
    ///
    /// - time to expiry: days remaining in `base` down to one day
    /// - spot and strike: 1 to 100
    /// - rate: 0.01% to 25%
    /// - volatility: 1% to 100%
    ///
    /// # Errors
    ///
    /// `InvalidAxis` for a time preset whose base expiry is not finite or
    /// exceeds [`MAX_PRESET_DAYS`].
    pub fn preset(field: OptionField, base: &OptionParameters) -> PricingResult<Self> {
        match field {
            OptionField::TimeToExpiry => {
                let days = base.days_to_expiry();
                if !days.is_finite() || days.round() > MAX_PRESET_DAYS as f64 {
                    return Err(PricingError::InvalidAxis {
                        field,
                        reason: format!(
                            "preset countdown needs a finite expiry of at most {} days, got {}",
                            MAX_PRESET_DAYS, days
                        ),
                    });
                }
                Ok(Self::days_to_expiry(days.round().max(1.0) as u32))
            }
            OptionField::SpotPrice | OptionField::StrikePrice => {
                Ok(Self::unit_grid(field, PRESET_POINTS))
            }
            OptionField::RiskFreeRate => Self::linspace(field, 0.0001, 0.25, PRESET_POINTS),
            OptionField::Volatility => Self::linspace(field, 0.01, 1.0, PRESET_POINTS),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every value is strictly below its predecessor.
    /// Renderers use this to invert the x-axis.
    pub fn is_descending(&self) -> bool {
        self.values.len() > 1 && self.values.windows(2).all(|w| w[1] < w[0])
    }

    /// Scenario for the point at `index`
    pub fn scenario(&self, base: &OptionParameters, index: usize) -> Option<OptionParameters> {
        self.values
            .get(index)
            .map(|&v| base.with_value(self.field, v))
    }
}
