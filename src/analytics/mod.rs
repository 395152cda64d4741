pub mod bs_analytic;
pub mod greeks;

pub use greeks::{Greeks, Metric, MetricSet};
