use log::info;

use crate::data::PointSet;
use crate::error::{FitErr, Result};

/// Immutable hyperparameters for one fitting run.
#[derive(Debug, Clone, Copy)]
pub struct RegressionConfig {
    /// Step size applied opposite the gradient at each iteration.
    pub learning_rate: f64,
    /// Number of gradient-descent iterations; the only termination bound.
    pub iterations: usize,
}

impl RegressionConfig {
    /// Returns a new configuration.
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
        }
    }

    /// Fits a line to `points` by batch gradient descent.
    ///
    /// Starts from `(0, 0)` and always runs the full iteration count; there
    /// is no convergence exit. Gradients are accumulated in point order so
    /// repeated runs over the same input are bit-identical.
    ///
    /// An extreme (but positive) learning rate can diverge to infinity or
    /// NaN; that is a tuning concern and the result is returned as-is.
    ///
    /// # Errors
    /// - `FitErr::EmptyPointSet` when `points` is empty.
    /// - `FitErr::InvalidLearningRate` when the rate is not a positive
    ///   finite number.
    pub fn fit(&self, points: &PointSet) -> Result<LinearModel> {
        if points.is_empty() {
            return Err(FitErr::EmptyPointSet { what: "a fit" });
        }

        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(FitErr::InvalidLearningRate {
                got: self.learning_rate,
            });
        }

        let mut model = LinearModel::default();

        for _ in 0..self.iterations {
            let (dm, dc) = gradient(points, &model);
            model.slope -= self.learning_rate * dm;
            model.intercept -= self.learning_rate * dc;
        }

        // Diagnostic only, never feeds back into the model.
        let cost = model.cost(points)?;
        info!(
            "final cost for ({}, {}): {cost}",
            model.slope, model.intercept
        );

        Ok(model)
    }
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self::new(0.01, 1000)
    }
}

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Predicted y for the given x.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Mean squared error of this model over `points`.
    ///
    /// # Errors
    /// Returns `FitErr::EmptyPointSet` when `points` is empty, the same
    /// policy as `RegressionConfig::fit`.
    pub fn cost(&self, points: &PointSet) -> Result<f64> {
        if points.is_empty() {
            return Err(FitErr::EmptyPointSet { what: "the cost" });
        }

        let mut sum = 0.0;
        for p in points.points() {
            let d = p.y - self.predict(p.x);
            sum += d * d;
        }

        Ok(sum / points.len() as f64)
    }
}

/// Gradient of the mean-squared cost with respect to slope and intercept,
/// accumulated over the whole set in point order.
fn gradient(points: &PointSet, model: &LinearModel) -> (f64, f64) {
    let (mut dm, mut dc) = (0.0, 0.0);

    for p in points.points() {
        let d = p.y - model.predict(p.x);
        dm += -p.x * d;
        dc += -d;
    }

    let n = points.len() as f64;
    (2.0 * dm / n, 2.0 * dc / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Point;

    fn pt(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Points exactly on y = 2x + 3.
    fn line_points() -> PointSet {
        PointSet::new(vec![pt(0.0, 3.0), pt(1.0, 5.0), pt(2.0, 7.0), pt(3.0, 9.0)])
    }

    #[test]
    fn zero_iterations_leave_the_zero_model() {
        let model = RegressionConfig::new(0.01, 0).fit(&line_points()).unwrap();

        assert_eq!(model, LinearModel::default());
    }

    #[test]
    fn fit_is_deterministic() {
        let cfg = RegressionConfig::new(0.01, 500);
        let ps = line_points();

        let a = cfg.fit(&ps).unwrap();
        let b = cfg.fit(&ps).unwrap();

        assert_eq!(a.slope.to_bits(), b.slope.to_bits());
        assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
    }

    #[test]
    fn fit_recovers_a_known_line() {
        let ps = line_points();
        let model = RegressionConfig::new(0.01, 10_000).fit(&ps).unwrap();

        assert!((model.slope - 2.0).abs() < 1e-2);
        assert!((model.intercept - 3.0).abs() < 1e-2);
        assert!(model.cost(&ps).unwrap() < 1e-3);
    }

    #[test]
    fn fit_does_not_increase_cost() {
        let ps = line_points();
        let zero_cost = LinearModel::default().cost(&ps).unwrap();

        let model = RegressionConfig::new(0.01, 100).fit(&ps).unwrap();
        let fitted_cost = model.cost(&ps).unwrap();

        assert!(fitted_cost.is_finite());
        assert!(fitted_cost <= zero_cost);
    }

    #[test]
    fn single_point_line_passes_through_it() {
        let ps = PointSet::new(vec![pt(5.0, 7.0)]);
        let model = RegressionConfig::new(0.01, 10_000).fit(&ps).unwrap();

        assert!((model.predict(5.0) - 7.0).abs() < 1e-2);
        assert!(model.cost(&ps).unwrap() < 1e-3);
    }

    #[test]
    fn empty_set_fails_fit_and_cost() {
        let ps = PointSet::default();

        assert!(matches!(
            RegressionConfig::default().fit(&ps),
            Err(FitErr::EmptyPointSet { .. })
        ));
        assert!(matches!(
            LinearModel::default().cost(&ps),
            Err(FitErr::EmptyPointSet { .. })
        ));
    }

    #[test]
    fn non_positive_learning_rate_is_rejected() {
        let ps = line_points();

        for rate in [0.0, -0.01, f64::NAN] {
            assert!(matches!(
                RegressionConfig::new(rate, 10).fit(&ps),
                Err(FitErr::InvalidLearningRate { .. })
            ));
        }
    }
}
