//! Training history: one immutable [`TrainingRecord`] per recorded step,
//! plus helpers that turn a history slice into plottable series.

use crate::Vector;

/// Snapshot of the model and one observation at the time it was recorded.
///
/// Fields are private so a record cannot change after it has been appended.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingRecord {
    slope: f64,
    intercept: f64,
    observation: (f64, f64),
    prediction: f64,
    error: f64,
    loss: f64,
    epoch: usize,
    message: Option<String>,
}

impl TrainingRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        slope: f64,
        intercept: f64,
        observation: (f64, f64),
        prediction: f64,
        error: f64,
        loss: f64,
        epoch: usize,
        message: Option<String>,
    ) -> Self {
        Self {
            slope,
            intercept,
            observation,
            prediction,
            error,
            loss,
            epoch,
            message,
        }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The `(x, y)` pair this record was computed for.
    pub fn observation(&self) -> (f64, f64) {
        self.observation
    }

    pub fn prediction(&self) -> f64 {
        self.prediction
    }

    pub fn error(&self) -> f64 {
        self.error
    }

    pub fn loss(&self) -> f64 {
        self.loss
    }

    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Loss of every record, in recording order.
pub fn losses(records: &[TrainingRecord]) -> Vector {
    records.iter().map(TrainingRecord::loss).collect()
}

/// Slope and intercept trajectories, in recording order.
pub fn parameter_path(records: &[TrainingRecord]) -> (Vector, Vector) {
    let slopes = records.iter().map(TrainingRecord::slope).collect();
    let intercepts = records.iter().map(TrainingRecord::intercept).collect();
    (slopes, intercepts)
}

/// Most recent record tagged with `epoch`.
pub fn last_in_epoch(records: &[TrainingRecord], epoch: usize) -> Option<&TrainingRecord> {
    records.iter().rev().find(|r| r.epoch == epoch)
}
