// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function Φ(x)
///
/// Uses `erfc` so the left tail keeps full relative precision.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x / SQRT_2)
}

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_table_values() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((norm_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-10);
        assert!((norm_cdf(-1.96) - 0.024_997_895_148_220).abs() < 1e-10);
    }

    #[test]
    fn test_norm_cdf_left_tail_keeps_relative_precision() {
        assert_relative_eq!(norm_cdf(-8.0), 6.220_960_574_271_785e-16, max_relative = 1e-9);
        assert_relative_eq!(norm_cdf(-5.0), 2.866_515_718_791_939e-7, max_relative = 1e-9);
        assert!(norm_cdf(-40.0) >= 0.0);
    }

    #[test]
    fn test_norm_cdf_symmetry_sums_to_one() {
        for x in [0.1, 0.4, 0.9, 2.5, 6.0] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        assert!((norm_pdf(0.0) - 0.398_942_280_401_433).abs() < 1e-12);
        assert_eq!(norm_pdf(1.3), norm_pdf(-1.3));
    }
}
