// src/config.rs
//! Run configuration
//!
//! A [`SweepConfig`] describes one run: the base scenario, an optional sweep
//! and the metrics to report. It is read from TOML, any key may be omitted:
//!
//! ```toml
//! parallel = true
//! metrics = ["price", "delta", "theta"]
//!
//! [base]
//! spot_price = 30.0
//! strike_price = 50.0
//! risk_free_rate = 0.03
//! time_to_expiry = 0.684931506849315
//! volatility = 0.3
//! option_type = "call"
//!
//! [sweep]
//! field = "spot_price"
//! start = 10.0
//! end = 80.0
//! points = 71
//! ```

use crate::analytics::greeks::{Metric, MetricSet};
use crate::error::{PricingError, PricingResult};
use crate::models::option::{OptionField, OptionParameters};
use crate::sweep::axis::{SweepAxis, PRESET_POINTS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] PricingError),

    #[error("Axis settings given without a sweep field: set one or add a [sweep] section")]
    MissingSweepField,
}

/// Axis settings from the command line, layered over the `[sweep]` section.
///
/// A `field` different from the configured one starts a fresh axis. Explicit
/// `values` replace a configured range and vice versa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisOverrides {
    pub field: Option<OptionField>,
    pub values: Option<Vec<f64>>,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub points: Option<usize>,
}

impl AxisOverrides {
    fn is_empty(&self) -> bool {
        self.field.is_none()
            && self.values.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.points.is_none()
    }
}

/// How to build the sweep axis. Explicit `values` win over `start`/`end`;
/// with neither, the preset axis for `field` is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub field: OptionField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<usize>,
}

impl AxisSpec {
    pub fn preset(field: OptionField) -> Self {
        Self {
            field,
            values: None,
            start: None,
            end: None,
            points: None,
        }
    }

    pub fn to_axis(&self, base: &OptionParameters) -> PricingResult<SweepAxis> {
        if let Some(values) = &self.values {
            return Ok(SweepAxis::new(self.field, values.clone()));
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) => SweepAxis::linspace(
                self.field,
                start,
                end,
                self.points.unwrap_or(PRESET_POINTS),
            ),
            (None, None) => SweepAxis::preset(self.field, base),
            _ => Err(PricingError::InvalidAxis {
                field: self.field,
                reason: "both 'start' and 'end' are required for a range".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub base: OptionParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep: Option<AxisSpec>,
    pub parallel: bool,
    pub metrics: Vec<Metric>,
}

impl SweepConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SweepConfig = toml::from_str(text)?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn apply_axis_overrides(&mut self, overrides: AxisOverrides) -> Result<(), ConfigError> {
        if overrides.is_empty() {
            return Ok(());
        }
        let mut spec = match (overrides.field, self.sweep.take()) {
            (Some(field), Some(current)) if current.field == field => current,
            (Some(field), _) => AxisSpec::preset(field),
            (None, Some(current)) => current,
            (None, None) => return Err(ConfigError::MissingSweepField),
        };

        if overrides.values.is_some() {
            spec.values = overrides.values;
            spec.start = None;
            spec.end = None;
        }
        if overrides.start.is_some() || overrides.end.is_some() {
            spec.values = None;
            spec.start = overrides.start.or(spec.start);
            spec.end = overrides.end.or(spec.end);
        }
        if overrides.points.is_some() {
            spec.points = overrides.points;
        }

        self.sweep = Some(spec);
        Ok(())
    }

    /// Validate the base scenario and, if present, the sweep axis bounds.
    ///
    /// Individual axis values are checked when the sweep runs, where a bad
    /// value is reported with its index.
    pub fn validate(&self) -> PricingResult<()> {
        match &self.sweep {
            Some(axis_spec) => {
                self.base.validate_except(axis_spec.field)?;
                axis_spec.to_axis(&self.base).map(|_| ())
            }
            None => self.base.validate(),
        }
    }

    pub fn axis(&self) -> Option<PricingResult<SweepAxis>> {
        self.sweep.as_ref().map(|axis_spec| axis_spec.to_axis(&self.base))
    }

    pub fn metric_set(&self) -> MetricSet {
        if self.metrics.is_empty() {
            MetricSet::all()
        } else {
            self.metrics.iter().copied().collect()
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            base: OptionParameters::default(),
            sweep: None,
            parallel: false,
            metrics: Metric::ALL.to_vec(),
        }
    }
}
