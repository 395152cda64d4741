// src/output.rs
//! CSV export for charting tools
//!
//! Sweep files hold one row per axis point: the swept field first, then one
//! column per selected metric. Summary files are `key,value` pairs describing a
//! single evaluation.

use crate::analytics::greeks::{Greeks, Metric, MetricSet};
use crate::models::option::OptionParameters;
use crate::sweep::result::SweepResult;
use std::io;

pub fn write_sweep<W: io::Write>(
    writer: W,
    result: &SweepResult,
    metrics: MetricSet,
) -> csv::Result<()> {
    let columns = metrics.metrics();
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![result.field().name().to_string()];
    header.extend(columns.iter().map(|m| m.name().to_string()));
    wtr.write_record(&header)?;

    for (x, greeks) in result.points() {
        let mut row = vec![x.to_string()];
        row.extend(columns.iter().map(|m| greeks.get(*m).to_string()));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_sweep_to_csv(filename: &str, result: &SweepResult, metrics: MetricSet) -> csv::Result<()> {
    let file = std::fs::File::create(filename)?;
    write_sweep(file, result, metrics)
}

pub fn write_summary<W: io::Write>(
    writer: W,
    params: &OptionParameters,
    greeks: &Greeks,
) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["key", "value"])?;

    let inputs = [
        ("option_type", params.option_type.to_string()),
        ("spot_price", params.spot_price.to_string()),
        ("strike_price", params.strike_price.to_string()),
        ("risk_free_rate", params.risk_free_rate.to_string()),
        ("time_to_expiry", params.time_to_expiry.to_string()),
        ("volatility", params.volatility.to_string()),
    ];
    for (key, value) in &inputs {
        wtr.write_record([*key, value.as_str()])?;
    }
    for metric in Metric::ALL {
        wtr.write_record([metric.name(), greeks.get(metric).to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_summary_to_csv(
    filename: &str,
    params: &OptionParameters,
    greeks: &Greeks,
) -> csv::Result<()> {
    let file = std::fs::File::create(filename)?;
    write_summary(file, params, greeks)
}
