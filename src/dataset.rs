use crate::{LinearModel, ModelError, Vector};
use ndarray::s;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Paired `(x, y)` observations, matched by position.
///
/// `xs` and `ys` always have the same length.
#[derive(Clone, Debug)]
pub struct Observations {
    xs: Vector,
    ys: Vector,
}

impl Observations {
    pub fn new(xs: Vector, ys: Vector) -> Result<Self, ModelError> {
        if xs.len() != ys.len() {
            return Err(ModelError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        Ok(Self { xs, ys })
    }

    /// Noisy samples of `y = slope * x + intercept` with `x` drawn from `[0, 10)`
    /// and noise drawn from `[-noise, noise)`.
    pub fn synthetic_line(
        n_samples: usize,
        slope: f64,
        intercept: f64,
        noise: f64,
        random_state: u64,
    ) -> Result<Self, ModelError> {
        if !(noise >= 0.0 && noise.is_finite()) {
            return Err(ModelError::InvalidParameter(format!(
                "noise must be finite and non-negative, got {}",
                noise
            )));
        }

        let mut rng = StdRng::seed_from_u64(random_state);
        let xs = Vector::random_using(n_samples, Uniform::new(0.0, 10.0), &mut rng);

        let line = LinearModel::from_params(slope, intercept);
        let mut ys = line.predict_batch(&xs);
        if noise > 0.0 {
            ys += &Vector::random_using(n_samples, Uniform::new(-noise, noise), &mut rng);
        }

        Self::new(xs, ys)
    }

    pub fn xs(&self) -> &Vector {
        &self.xs
    }

    pub fn ys(&self) -> &Vector {
        &self.ys
    }

    pub fn n_samples(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Splits off the last `test_size` fraction of samples as the test set.
    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self), ModelError> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(ModelError::InvalidParameter(format!(
                "test_size must be between 0 and 1, got {}",
                test_size
            )));
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples - n_test;

        let train = Observations::new(
            self.xs.slice(s![..n_train]).to_owned(),
            self.ys.slice(s![..n_train]).to_owned(),
        )?;
        let test = Observations::new(
            self.xs.slice(s![n_train..]).to_owned(),
            self.ys.slice(s![n_train..]).to_owned(),
        )?;

        Ok((train, test))
    }
}
