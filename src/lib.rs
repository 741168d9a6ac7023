pub use ndarray::Array1;

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;

pub use dataset::Observations;
pub use error::ModelError;
pub use linear_model::{LinearModel, TrainingRecord};

pub type Vector = Array1<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        assert_eq!(vec.len(), 5);

        let model = LinearModel::from_params(1.0, 0.0);
        assert_eq!(model.predict(vec[0]), 0.0);
    }
}
