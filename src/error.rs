//! Error type shared by the model, the metrics and the dataset helpers.

/// Errors raised on invalid caller input.
///
/// Numeric problems (overflow, NaN) are never reported here: non-finite
/// inputs simply produce non-finite outputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("xs and ys must have the same length (got {xs} and {ys})")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("at least one observation is required")]
    EmptyInput,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ModelError {
    /// Validates that two paired sequences are non-empty and of equal length.
    pub(crate) fn check_pairs(xs: usize, ys: usize) -> Result<usize, ModelError> {
        if xs != ys {
            return Err(ModelError::LengthMismatch { xs, ys });
        }
        if xs == 0 {
            return Err(ModelError::EmptyInput);
        }
        Ok(xs)
    }
}
