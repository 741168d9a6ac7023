//! Single-variable linear model for stepping through gradient descent by hand.
//!
//! - `LinearModel`: slope/intercept, prediction, loss, gradient and a manual step
//! - `TrainingRecord`: immutable snapshot appended to the model's history
//!
//! # Examples
//!
//! ```rust
//! use linear_descent::LinearModel;
//!
//! let mut model = LinearModel::new(Some(2.0), Some(1.0));
//! let (d_slope, d_intercept) = model.gradient(3.0, 10.0);
//!
//! model.update_history(3.0, 10.0, 0, Some("before step"));
//! model.step(-0.01 * d_slope, -0.01 * d_intercept);
//!
//! assert_eq!(model.history().len(), 1);
//! assert!(model.loss(3.0, 10.0) < 9.0);
//! println!("{model}");
//! ```

pub mod history;
mod linear_regression;

pub use history::TrainingRecord;
pub use linear_regression::LinearModel;
