use std::fmt;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::history::TrainingRecord;
use crate::{ModelError, Vector};

/// Single-variable line `y = slope * x + intercept`, trained by hand.
///
/// The model never updates itself: callers compute a [`gradient`](Self::gradient),
/// choose a step and apply it with [`step`](Self::step), optionally logging
/// each observation with [`update_history`](Self::update_history).
#[derive(Clone, Debug)]
pub struct LinearModel {
    slope: f64,
    intercept: f64,
    history: Vec<TrainingRecord>,
}

impl LinearModel {
    /// Creates a model, drawing any missing parameter uniformly from `[0, 1)`.
    ///
    /// A supplied `Some(0.0)` is kept as zero.
    pub fn new(slope: Option<f64>, intercept: Option<f64>) -> Self {
        Self::init_with(slope, intercept, &mut rand::thread_rng())
    }

    /// Like [`new`](Self::new), but missing parameters come from an RNG seeded
    /// with `random_state`, so runs are reproducible.
    pub fn with_random_state(slope: Option<f64>, intercept: Option<f64>, random_state: u64) -> Self {
        Self::init_with(slope, intercept, &mut StdRng::seed_from_u64(random_state))
    }

    pub fn from_params(slope: f64, intercept: f64) -> Self {
        Self {
            slope,
            intercept,
            history: Vec::new(),
        }
    }

    fn init_with<R: Rng + ?Sized>(slope: Option<f64>, intercept: Option<f64>, rng: &mut R) -> Self {
        let slope = slope.unwrap_or_else(|| {
            let value = rng.gen_range(0.0..1.0);
            trace!("slope not supplied, drew {value}");
            value
        });
        let intercept = intercept.unwrap_or_else(|| {
            let value = rng.gen_range(0.0..1.0);
            trace!("intercept not supplied, drew {value}");
            value
        });

        Self::from_params(slope, intercept)
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn params(&self) -> (f64, f64) {
        (self.slope, self.intercept)
    }

    /// Recorded steps, oldest first.
    pub fn history(&self) -> &[TrainingRecord] {
        &self.history
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn predict_batch(&self, xs: &Vector) -> Vector {
        xs.mapv(|x| self.predict(x))
    }

    /// Signed residual `predict(x) - y`.
    pub fn error(&self, x: f64, y: f64) -> f64 {
        self.predict(x) - y
    }

    /// Squared error for one observation.
    pub fn loss(&self, x: f64, y: f64) -> f64 {
        let error = self.error(x, y);
        error * error
    }

    /// Partial derivatives of the loss with respect to `(slope, intercept)`.
    ///
    /// The constant factor 2 is left out: this returns `(x * error, error)`,
    /// and step sizes are expected to absorb it.
    pub fn gradient(&self, x: f64, y: f64) -> (f64, f64) {
        let error = self.error(x, y);
        (x * error, error)
    }

    /// Aggregate error over paired observations.
    ///
    /// Computes `sqrt(sum(loss)) / n`: the square root is taken of the total
    /// loss and the result is divided by `n` afterwards. This is not the
    /// textbook RMSE `sqrt(sum(loss) / n)`; use
    /// [`metrics::root_mean_squared_error`](crate::metrics::root_mean_squared_error)
    /// for that.
    pub fn rmse(&self, xs: &Vector, ys: &Vector) -> Result<f64, ModelError> {
        let n = ModelError::check_pairs(xs.len(), ys.len())?;

        let total: f64 = xs.iter().zip(ys.iter()).map(|(&x, &y)| self.loss(x, y)).sum();
        Ok(total.sqrt() / n as f64)
    }

    /// Coefficient of determination of the current line on `(xs, ys)`.
    pub fn score(&self, xs: &Vector, ys: &Vector) -> Result<f64, ModelError> {
        ModelError::check_pairs(xs.len(), ys.len())?;
        let y_pred = self.predict_batch(xs);
        crate::metrics::r2_score(ys, &y_pred)
    }

    /// Adds the given amounts to slope and intercept. No magnitude checks.
    pub fn step(&mut self, slope_step: f64, intercept_step: f64) {
        self.slope += slope_step;
        self.intercept += intercept_step;
        debug!(
            "step ({slope_step}, {intercept_step}) -> slope={}, intercept={}",
            self.slope, self.intercept
        );
    }

    /// Appends a snapshot of the current parameters evaluated at `(x, y)`.
    pub fn update_history(&mut self, x: f64, y: f64, epoch: usize, message: Option<&str>) {
        let record = TrainingRecord::new(
            self.slope,
            self.intercept,
            (x, y),
            self.predict(x),
            self.error(x, y),
            self.loss(x, y),
            epoch,
            message.map(str::to_owned),
        );
        debug!(
            "epoch {epoch}: recorded ({x}, {y}) loss={} [{} records]",
            record.loss(),
            self.history.len() + 1
        );
        self.history.push(record);
    }

    /// [`update_history`](Self::update_history) with epoch 0 and no message.
    pub fn record(&mut self, x: f64, y: f64) {
        self.update_history(x, y, 0, None);
    }
}

impl Default for LinearModel {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Renders `y = {slope}x + {intercept}` with three decimals.
///
/// Uses Rust's fixed-point formatting of the exact binary value; exact
/// decimal ties round half to even. A negative intercept prints as `+ -1.000`.
impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.3}x + {:.3}", self.slope, self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_predict_error_loss_gradient() {
        let model = LinearModel::from_params(2.0, 1.0);

        assert_eq!(model.predict(3.0), 7.0);
        assert_eq!(model.error(3.0, 10.0), -3.0);
        assert_eq!(model.loss(3.0, 10.0), 9.0);
        assert_eq!(model.gradient(3.0, 10.0), (-9.0, -3.0));
    }

    #[test]
    fn test_end_to_end_step() {
        let mut model = LinearModel::new(Some(2.0), Some(1.0));
        assert_eq!(model.predict(3.0), 7.0);

        model.step(0.1, -0.1);

        assert!((model.slope() - 2.1).abs() < 1e-10);
        assert!((model.intercept() - 0.9).abs() < 1e-10);
        assert!((model.predict(3.0) - 7.2).abs() < 1e-10);
    }

    #[test]
    fn test_loss_is_square_of_error() {
        let model = LinearModel::from_params(-1.5, 0.25);

        for &(x, y) in &[(0.0, 0.0), (1.0, -3.0), (-2.5, 4.0), (10.0, -15.0)] {
            let error = model.error(x, y);
            assert_eq!(model.loss(x, y), error * error);
            assert!(model.loss(x, y) >= 0.0);
            assert_eq!(model.gradient(x, y), (x * error, error));
        }
    }

    #[test]
    fn test_step_is_additive() {
        let mut twice = LinearModel::from_params(0.5, -0.5);
        let mut once = twice.clone();

        twice.step(0.25, 1.0);
        twice.step(-0.75, 2.0);
        once.step(-0.5, 3.0);

        assert!((twice.slope() - once.slope()).abs() < 1e-10);
        assert!((twice.intercept() - once.intercept()).abs() < 1e-10);
    }

    #[test]
    fn test_missing_params_are_random_in_unit_interval() {
        for _ in 0..50 {
            let model = LinearModel::new(None, None);
            assert!((0.0..1.0).contains(&model.slope()));
            assert!((0.0..1.0).contains(&model.intercept()));
        }
    }

    #[test]
    fn test_explicit_zero_is_kept() {
        let model = LinearModel::new(Some(0.0), Some(0.0));
        assert_eq!(model.params(), (0.0, 0.0));

        let model = LinearModel::with_random_state(Some(0.0), None, 7);
        assert_eq!(model.slope(), 0.0);
        assert!((0.0..1.0).contains(&model.intercept()));
    }

    #[test]
    fn test_random_state_is_reproducible() {
        let a = LinearModel::with_random_state(None, None, 42);
        let b = LinearModel::with_random_state(None, None, 42);
        assert_eq!(a.params(), b.params());

        let c = LinearModel::with_random_state(Some(3.0), None, 42);
        assert_eq!(c.slope(), 3.0);
    }

    #[test]
    fn test_rmse_formula() {
        let model = LinearModel::from_params(1.0, 0.0);
        let xs = array![1.0, 2.0, 3.0, 4.0];
        let ys = array![3.0, 0.0, 5.0, 2.0];

        // losses 4 + 4 + 4 + 4 = 16, sqrt = 4, / 4 = 1
        let rmse = model.rmse(&xs, &ys).unwrap();
        assert!((rmse - 1.0).abs() < 1e-10);

        let textbook = crate::metrics::root_mean_squared_error(&ys, &model.predict_batch(&xs)).unwrap();
        assert!((textbook - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_rmse_single_point() {
        let model = LinearModel::from_params(2.0, 1.0);
        let rmse = model.rmse(&array![3.0], &array![10.0]).unwrap();
        assert!((rmse - model.loss(3.0, 10.0).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_rmse_invalid_arguments() {
        let model = LinearModel::from_params(2.0, 1.0);

        assert_eq!(
            model.rmse(&array![1.0, 2.0], &array![1.0]),
            Err(ModelError::LengthMismatch { xs: 2, ys: 1 })
        );
        assert_eq!(
            model.rmse(&Vector::zeros(0), &Vector::zeros(0)),
            Err(ModelError::EmptyInput)
        );
    }

    #[test]
    fn test_update_history() {
        let mut model = LinearModel::from_params(2.0, 1.0);
        model.record(1.0, 4.0);
        let first = model.history()[0].clone();

        model.step(0.5, 0.5);
        model.update_history(3.0, 10.0, 2, Some("m"));

        assert_eq!(model.history().len(), 2);
        assert_eq!(model.history()[0], first);

        let last = &model.history()[1];
        assert_eq!(last.epoch(), 2);
        assert_eq!(last.message(), Some("m"));
        assert_eq!(last.observation(), (3.0, 10.0));
        assert_eq!(last.slope(), 2.5);
        assert_eq!(last.intercept(), 1.5);
        assert_eq!(last.prediction(), model.predict(3.0));
        assert_eq!(last.error(), model.error(3.0, 10.0));
        assert_eq!(last.loss(), model.loss(3.0, 10.0));

        assert_eq!(first.epoch(), 0);
        assert_eq!(first.message(), None);
        assert_eq!(first.prediction(), 3.0);
        assert_eq!(first.loss(), 1.0);
    }

    #[test]
    fn test_update_history_does_not_move_params() {
        let mut model = LinearModel::from_params(2.0, 1.0);
        model.update_history(5.0, -5.0, 1, None);
        assert_eq!(model.params(), (2.0, 1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(LinearModel::from_params(2.0, 1.0).to_string(), "y = 2.000x + 1.000");
        assert_eq!(LinearModel::from_params(1.23456, 0.1).to_string(), "y = 1.235x + 0.100");
        assert_eq!(LinearModel::from_params(2.0, -1.0).to_string(), "y = 2.000x + -1.000");
    }

    #[test]
    fn test_display_exact_ties_round_to_even() {
        // 0.0625 and 0.1875 are exact in binary, so the fourth decimal is a true tie
        assert_eq!(LinearModel::from_params(0.0625, 0.0).to_string(), "y = 0.062x + 0.000");
        assert_eq!(LinearModel::from_params(0.1875, 0.0625).to_string(), "y = 0.188x + 0.062");
    }

    #[test]
    fn test_score_perfect_fit() {
        let model = LinearModel::from_params(2.0, 1.0);
        let xs = array![0.0, 1.0, 2.0];
        let ys = array![1.0, 3.0, 5.0];

        assert!((model.score(&xs, &ys).unwrap() - 1.0).abs() < 1e-10);
        assert!(model.score(&xs, &array![1.0]).is_err());
    }

    #[test]
    fn test_nan_propagates() {
        let model = LinearModel::from_params(2.0, 1.0);
        assert!(model.predict(f64::NAN).is_nan());
        assert!(model.loss(f64::INFINITY, 0.0).is_infinite());
    }
}
