// src/sweep/engine.rs
//! Parameter sweeps over the closed-form engine
//!
//! Both entry points derive one scenario per axis value from the base
//! scenario (only the swept field changes) and evaluate price plus all five
//! Greeks for it. The fixed fields of the base are checked first, so an
//! invalid base fails with `InvalidParameter` even for an empty axis. After
//! that a sweep is all-or-nothing: the first invalid point aborts it with
//! [`PricingError::InvalidSweepPoint`] and no partial series are returned.
//!
//! [`par_sweep`] spreads the evaluation over the rayon pool. Points are
//! validated in order beforehand, so it reports the same failing point as
//! [`sweep`] and produces identical series.

use crate::analytics::bs_analytic;
use crate::analytics::greeks::Greeks;
use crate::error::{PricingError, PricingResult};
use crate::models::option::OptionParameters;
use crate::sweep::axis::SweepAxis;
use crate::sweep::result::SweepResult;
use rayon::prelude::*;
use tracing::{debug, debug_span, warn};

/// Evaluate `base` at every value of `axis`, sequentially and in axis order.
///
/// # Errors
///
/// `InvalidParameter` when a field other than the swept one is invalid in
/// `base`. Otherwise `InvalidSweepPoint` for the first axis value whose
/// derived scenario fails validation.
pub fn sweep(base: &OptionParameters, axis: &SweepAxis) -> PricingResult<SweepResult> {
    let _span = debug_span!("sweep", field = %axis.field, points = axis.len()).entered();
    base.validate_except(axis.field)?;

    let mut points: Vec<Greeks> = Vec::with_capacity(axis.len());
    for (index, &value) in axis.values.iter().enumerate() {
        let scenario = base.with_value(axis.field, value);
        let greeks =
            bs_analytic::greeks(&scenario).map_err(|e| point_error(axis, index, value, e))?;
        points.push(greeks);
    }

    debug!("sweep complete");
    Ok(SweepResult::from_points(axis.clone(), &points))
}

/// Parallel counterpart of [`sweep`] with the same output and failure point.
pub fn par_sweep(base: &OptionParameters, axis: &SweepAxis) -> PricingResult<SweepResult> {
    let _span = debug_span!("par_sweep", field = %axis.field, points = axis.len()).entered();
    base.validate_except(axis.field)?;

    for (index, &value) in axis.values.iter().enumerate() {
        base.with_value(axis.field, value)
            .validate()
            .map_err(|e| point_error(axis, index, value, e))?;
    }

    let points: Vec<Greeks> = axis
        .values
        .par_iter()
        .map(|&value| bs_analytic::greeks_unchecked(&base.with_value(axis.field, value)))
        .collect();

    debug!(threads = rayon::current_num_threads(), "parallel sweep complete");
    Ok(SweepResult::from_points(axis.clone(), &points))
}

fn point_error(axis: &SweepAxis, index: usize, value: f64, cause: PricingError) -> PricingError {
    warn!(field = %axis.field, index, value, error = %cause, "sweep aborted");
    PricingError::InvalidSweepPoint {
        field: axis.field,
        index,
        value,
        source: Box::new(cause),
    }
}
