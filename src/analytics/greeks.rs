// src/analytics/greeks.rs
//! Valuation output types
//!
//! [`Greeks`] bundles the price with the five first-order sensitivities of one
//! evaluation. [`Metric`] names a single output so callers can pick series out
//! of a sweep, and [`MetricSet`] selects several of them at once (e.g. the
//! columns of a CSV export).

use crate::error::PricingError;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price and sensitivities of one option scenario
///
/// Units follow charting conventions: theta per calendar day, vega per one
/// volatility point (1%), rho per one rate point (1%).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Greeks {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl Greeks {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Price => self.price,
            Metric::Delta => self.delta,
            Metric::Gamma => self.gamma,
            Metric::Theta => self.theta,
            Metric::Vega => self.vega,
            Metric::Rho => self.rho,
        }
    }
}

/// A single output of the pricing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Price,
    Delta,
    Gamma,
    Theta,
    Vega,
    Rho,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Price,
        Metric::Delta,
        Metric::Gamma,
        Metric::Theta,
        Metric::Vega,
        Metric::Rho,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Price => "price",
            Metric::Delta => "delta",
            Metric::Gamma => "gamma",
            Metric::Theta => "theta",
            Metric::Vega => "vega",
            Metric::Rho => "rho",
        }
    }

    /// Chart title for dashboards and tables
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Price => "Option Price",
            Metric::Delta => "Delta",
            Metric::Gamma => "Gamma",
            Metric::Theta => "Theta",
            Metric::Vega => "Vega",
            Metric::Rho => "Rho",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| PricingError::UnknownName {
                kind: "metric",
                input: s.to_string(),
            })
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MetricSet: u32 {
        const PRICE = 1 << 0;
        const DELTA = 1 << 1;
        const GAMMA = 1 << 2;
        const THETA = 1 << 3;
        const VEGA  = 1 << 4;
        const RHO   = 1 << 5;
    }
}

impl MetricSet {
    /// Metrics in the set, in canonical output order
    pub fn metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|m| self.contains(MetricSet::from(*m)))
            .collect()
    }
}

impl From<Metric> for MetricSet {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Price => MetricSet::PRICE,
            Metric::Delta => MetricSet::DELTA,
            Metric::Gamma => MetricSet::GAMMA,
            Metric::Theta => MetricSet::THETA,
            Metric::Vega => MetricSet::VEGA,
            Metric::Rho => MetricSet::RHO,
        }
    }
}

impl FromIterator<Metric> for MetricSet {
    fn from_iter<I: IntoIterator<Item = Metric>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MetricSet::empty(), |set, m| set | MetricSet::from(m))
    }
}

impl Default for MetricSet {
    fn default() -> Self {
        MetricSet::all()
    }
}
