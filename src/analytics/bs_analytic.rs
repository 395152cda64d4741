// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! European calls and puts then have closed-form values built from the
//! cumulative normal Φ and the density φ evaluated at:
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! Every public function validates its [`OptionParameters`] first and
//! recomputes d₁/d₂ from them; nothing is cached between calls.

use crate::analytics::greeks::Greeks;
use crate::error::PricingResult;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::models::option::{OptionParameters, OptionType, DAYS_PER_YEAR};

/// Scale for "per 1%" sensitivities (vega, rho)
const PER_POINT: f64 = 0.01;

/// Intermediate quantities shared by all formulas for one scenario
#[derive(Debug, Clone, Copy)]
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    /// K·e^(-rT)
    discounted_strike: f64,
}

impl Terms {
    fn new(p: &OptionParameters) -> Self {
        let sqrt_t = p.time_to_expiry.sqrt();
        let sigma_sqrt_t = p.volatility * sqrt_t;
        let d1 = ((p.spot_price / p.strike_price).ln()
            + (p.risk_free_rate + 0.5 * p.volatility * p.volatility) * p.time_to_expiry)
            / sigma_sqrt_t;
        Terms {
            d1,
            d2: d1 - sigma_sqrt_t,
            sqrt_t,
            discounted_strike: p.strike_price * (-p.risk_free_rate * p.time_to_expiry).exp(),
        }
    }
}

/// Black-Scholes European option price
///
/// # Formula
/// ```text
/// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// # Errors
/// `InvalidParameter` when S, K, σ or T is not strictly positive, or r is negative.
pub fn price(params: &OptionParameters) -> PricingResult<f64> {
    params.validate()?;
    Ok(price_with(params, &Terms::new(params)))
}

/// Delta (∂V/∂S)
///
/// # Formula
/// ```text
/// Δ_call = Φ(d₁)
/// Δ_put  = -Φ(-d₁)
/// ```
///
/// # Interpretation
/// - Hedge ratio: number of shares per option
/// - Range: (0, 1) for calls, (-1, 0) for puts
pub fn delta(params: &OptionParameters) -> PricingResult<f64> {
    params.validate()?;
    Ok(delta_with(params, &Terms::new(params)))
}

/// Gamma (∂²V/∂S²)
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √T)
/// ```
///
/// Same for calls and puts; maximal near the money.
pub fn gamma(params: &OptionParameters) -> PricingResult<f64> {
    params.validate()?;
    Ok(gamma_with(params, &Terms::new(params)))
}

/// Theta (∂V/∂t) per calendar day
///
/// # Formula
/// ```text
/// Θ_call = [-S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)] / 365
/// Θ_put  = [-S*φ(d₁)*σ/(2√T) + r*K*e^(-rT)*Φ(-d₂)] / 365
/// ```
///
/// # Interpretation
/// - Time decay of option value
/// - Usually negative for long options; accelerates near expiry
pub fn theta(params: &OptionParameters) -> PricingResult<f64> {
    params.validate()?;
    Ok(theta_with(params, &Terms::new(params)))
}

/// Vega (∂V/∂σ) per 1% volatility change
///
/// # Formula
/// ```text
/// ν = S * √T * φ(d₁) * 0.01
/// ```
///
/// Same for calls and puts.
pub fn vega(params: &OptionParameters) -> PricingResult<f64> {
    params.validate()?;
    Ok(vega_with(params, &Terms::new(params)))
}

/// Rho (∂V/∂r) per 1% rate change
///
/// # Formula
/// ```text
/// ρ_call =  0.01 * K * T * e^(-rT) * Φ(d₂)
/// ρ_put  = -0.01 * K * T * e^(-rT) * Φ(-d₂)
/// ```
pub fn rho(params: &OptionParameters) -> PricingResult<f64> {
    params.validate()?;
    Ok(rho_with(params, &Terms::new(params)))
}

/// Price and all five Greeks, validating the scenario once
pub fn greeks(params: &OptionParameters) -> PricingResult<Greeks> {
    params.validate()?;
    Ok(greeks_unchecked(params))
}

/// Evaluate a scenario that the caller has already validated
pub(crate) fn greeks_unchecked(params: &OptionParameters) -> Greeks {
    let terms = Terms::new(params);
    Greeks {
        price: price_with(params, &terms),
        delta: delta_with(params, &terms),
        gamma: gamma_with(params, &terms),
        theta: theta_with(params, &terms),
        vega: vega_with(params, &terms),
        rho: rho_with(params, &terms),
    }
}

fn price_with(p: &OptionParameters, t: &Terms) -> f64 {
    match p.option_type {
        OptionType::Call => p.spot_price * norm_cdf(t.d1) - t.discounted_strike * norm_cdf(t.d2),
        OptionType::Put => t.discounted_strike * norm_cdf(-t.d2) - p.spot_price * norm_cdf(-t.d1),
    }
}

fn delta_with(p: &OptionParameters, t: &Terms) -> f64 {
    match p.option_type {
        OptionType::Call => norm_cdf(t.d1),
        OptionType::Put => -norm_cdf(-t.d1),
    }
}

fn gamma_with(p: &OptionParameters, t: &Terms) -> f64 {
    norm_pdf(t.d1) / (p.spot_price * p.volatility * t.sqrt_t)
}

fn theta_with(p: &OptionParameters, t: &Terms) -> f64 {
    let decay = -p.spot_price * norm_pdf(t.d1) * p.volatility / (2.0 * t.sqrt_t);
    let carry = p.risk_free_rate * t.discounted_strike;
    let annual = match p.option_type {
        OptionType::Call => decay - carry * norm_cdf(t.d2),
        OptionType::Put => decay + carry * norm_cdf(-t.d2),
    };
    annual / DAYS_PER_YEAR
}

fn vega_with(p: &OptionParameters, t: &Terms) -> f64 {
    p.spot_price * t.sqrt_t * norm_pdf(t.d1) * PER_POINT
}

fn rho_with(p: &OptionParameters, t: &Terms) -> f64 {
    let exposure = PER_POINT * p.time_to_expiry * t.discounted_strike;
    match p.option_type {
        OptionType::Call => exposure * norm_cdf(t.d2),
        OptionType::Put => -exposure * norm_cdf(-t.d2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::models::option::OptionField;
    use approx::assert_relative_eq;

    fn atm(option_type: OptionType) -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 0.05, 1.0, 0.2, option_type).unwrap()
    }

    #[test]
    fn test_atm_call_reference_values() {
        let g = greeks(&atm(OptionType::Call)).unwrap();
        assert_relative_eq!(g.price, 10.450583572185565, max_relative = 1e-8);
        assert_relative_eq!(g.delta, 0.6368306511756191, max_relative = 1e-8);
        assert_relative_eq!(g.gamma, 0.018762017345846895, max_relative = 1e-8);
        assert_relative_eq!(g.theta, -0.01757267820941972, max_relative = 1e-8);
        assert_relative_eq!(g.vega, 0.3752403469169379, max_relative = 1e-8);
        assert_relative_eq!(g.rho, 0.5323248154537634, max_relative = 1e-8);
    }

    #[test]
    fn test_atm_put_reference_values() {
        let g = greeks(&atm(OptionType::Put)).unwrap();
        assert_relative_eq!(g.price, 5.573526022256971, max_relative = 1e-8);
        assert_relative_eq!(g.delta, -0.3631693488243809, max_relative = 1e-8);
        assert_relative_eq!(g.theta, -0.004542138147766099, max_relative = 1e-8);
        assert_relative_eq!(g.rho, -0.41890460904695065, max_relative = 1e-8);
    }

    #[test]
    fn test_single_metric_functions_match_bundle() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let p = atm(option_type);
            let g = greeks(&p).unwrap();
            assert_eq!(price(&p).unwrap(), g.price);
            assert_eq!(delta(&p).unwrap(), g.delta);
            assert_eq!(gamma(&p).unwrap(), g.gamma);
            assert_eq!(theta(&p).unwrap(), g.theta);
            assert_eq!(vega(&p).unwrap(), g.vega);
            assert_eq!(rho(&p).unwrap(), g.rho);
        }
    }

    #[test]
    fn test_zero_volatility_is_rejected_by_every_function() {
        let p = atm(OptionType::Call).with_value(OptionField::Volatility, 0.0);
        let results = [price(&p), delta(&p), gamma(&p), theta(&p), vega(&p), rho(&p)];
        for result in results {
            match result {
                Err(PricingError::InvalidParameter { field, .. }) => {
                    assert_eq!(field, OptionField::Volatility)
                }
                other => panic!("expected volatility error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_zero_rate_theta_is_pure_decay() {
        let call = atm(OptionType::Call).with_value(OptionField::RiskFreeRate, 0.0);
        let put = call.with_option_type(OptionType::Put);
        assert_relative_eq!(theta(&call).unwrap(), theta(&put).unwrap(), max_relative = 1e-12);
    }
}
