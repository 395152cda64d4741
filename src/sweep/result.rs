// src/sweep/result.rs
use crate::analytics::greeks::{Greeks, Metric};
use crate::models::option::OptionField;
use crate::sweep::axis::SweepAxis;
use serde::Serialize;

/// Output of one sweep: six series index-aligned with the axis values
///
/// Built once by the sweep functions and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    axis: SweepAxis,
    price: Vec<f64>,
    delta: Vec<f64>,
    gamma: Vec<f64>,
    theta: Vec<f64>,
    vega: Vec<f64>,
    rho: Vec<f64>,
}

impl SweepResult {
    /// `points` must hold one evaluation per axis value, in axis order.
    pub(crate) fn from_points(axis: SweepAxis, points: &[Greeks]) -> Self {
        debug_assert_eq!(axis.len(), points.len());
        Self {
            price: column(points, |g| g.price),
            delta: column(points, |g| g.delta),
            gamma: column(points, |g| g.gamma),
            theta: column(points, |g| g.theta),
            vega: column(points, |g| g.vega),
            rho: column(points, |g| g.rho),
            axis,
        }
    }

    pub fn axis(&self) -> &SweepAxis {
        &self.axis
    }

    pub fn field(&self) -> OptionField {
        self.axis.field
    }

    pub fn values(&self) -> &[f64] {
        &self.axis.values
    }

    pub fn price(&self) -> &[f64] {
        &self.price
    }

    pub fn delta(&self) -> &[f64] {
        &self.delta
    }

    pub fn gamma(&self) -> &[f64] {
        &self.gamma
    }

    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    pub fn vega(&self) -> &[f64] {
        &self.vega
    }

    pub fn rho(&self) -> &[f64] {
        &self.rho
    }

    pub fn series(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Price => &self.price,
            Metric::Delta => &self.delta,
            Metric::Gamma => &self.gamma,
            Metric::Theta => &self.theta,
            Metric::Vega => &self.vega,
            Metric::Rho => &self.rho,
        }
    }

    pub fn len(&self) -> usize {
        self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Greeks> {
        (index < self.len()).then(|| Greeks {
            price: self.price[index],
            delta: self.delta[index],
            gamma: self.gamma[index],
            theta: self.theta[index],
            vega: self.vega[index],
            rho: self.rho[index],
        })
    }

    /// `(axis value, evaluation)` pairs in axis order
    pub fn points(&self) -> impl Iterator<Item = (f64, Greeks)> + '_ {
        self.axis
            .values
            .iter()
            .enumerate()
            .filter_map(move |(i, &x)| self.get(i).map(|g| (x, g)))
    }
}

fn column(points: &[Greeks], f: impl Fn(&Greeks) -> f64) -> Vec<f64> {
    points.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_point_order() {
        let axis = SweepAxis::new(OptionField::SpotPrice, vec![3.0, 1.0]);
        let first = Greeks {
            price: 1.0,
            delta: 0.5,
            ..Default::default()
        };
        let second = Greeks {
            price: 2.0,
            delta: 0.7,
            ..Default::default()
        };
        let result = SweepResult::from_points(axis, &[first, second]);

        assert_eq!(result.price(), &[1.0, 2.0]);
        assert_eq!(result.series(Metric::Delta), &[0.5, 0.7]);
        assert_eq!(result.get(1), Some(second));
        assert_eq!(result.get(2), None);

        let pairs: Vec<(f64, f64)> = result.points().map(|(x, g)| (x, g.price)).collect();
        assert_eq!(pairs, vec![(3.0, 1.0), (1.0, 2.0)]);
    }
}
