//! Textbook regression metrics.
//!
//! These are the standard definitions. [`LinearModel::rmse`](crate::LinearModel::rmse)
//! deliberately uses a different formula; compare it with
//! [`root_mean_squared_error`] here.

use crate::{ModelError, Vector};

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, ModelError> {
    let n = ModelError::check_pairs(y_true.len(), y_pred.len())?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / n as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, ModelError> {
    let n = ModelError::check_pairs(y_true.len(), y_pred.len())?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x.abs()).sum() / n as f64)
}

/// `sqrt(mean((y_true - y_pred)^2))`.
pub fn root_mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, ModelError> {
    mean_squared_error(y_true, y_pred).map(f64::sqrt)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, ModelError> {
    let n = ModelError::check_pairs(y_true.len(), y_pred.len())?;

    let y_mean = y_true.sum() / n as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // Perfect prediction when variance is zero
    }

    Ok(1.0 - ss_res / ss_tot)
}
