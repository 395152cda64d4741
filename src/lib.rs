//! # bsm-greeks: Closed-Form Black-Scholes-Merton Greeks and Parameter Sweeps
//!
//! Prices European calls and puts under the Black-Scholes-Merton model,
//! computes their first-order sensitivities, and sweeps one market parameter
//! across a range to produce chart-ready series.
//!
//! ## Key Features
//!
//! - **Closed-form engine**: price, delta, gamma, theta (per day), vega and rho (per 1%)
//! - **Explicit validation**: invalid scenarios fail with the offending field and value
//! - **Generic sweeps**: vary spot, strike, rate, time to expiry or volatility with one call
//! - **Parallel sweeps**: Rayon-backed evaluation with the same output as the serial path
//! - **Export**: CSV series for charting, TOML run configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_greeks::analytics::bs_analytic;
//! use bsm_greeks::models::{OptionField, OptionParameters, OptionType};
//! use bsm_greeks::sweep::{sweep, SweepAxis};
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call)
//!     .expect("valid scenario");
//! let greeks = bs_analytic::greeks(&params).expect("valid scenario");
//! println!("price {:.4}, delta {:.4}", greeks.price, greeks.delta);
//!
//! // Spot from 80 to 120 with everything else held fixed
//! let axis = SweepAxis::linspace(OptionField::SpotPrice, 80.0, 120.0, 41).expect("valid axis");
//! let result = sweep(&params, &axis).expect("valid sweep");
//! assert_eq!(result.delta().len(), 41);
//! ```
//!
//! ## Concurrency
//!
//! There is no shared state: every function is pure and all types are
//! `Send + Sync`, so evaluations can run from any thread.

// Module declarations
pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod sweep;

// Re-export commonly used types for convenience
pub use analytics::{Greeks, Metric, MetricSet};
pub use error::{PricingError, PricingResult};
pub use models::{OptionField, OptionParameters, OptionType};
pub use sweep::{par_sweep, sweep, SweepAxis, SweepResult};
