//! Submission validation errors.
//!
//! The display text of each variant is sent verbatim to the client, so the
//! messages are written for students, not operators.

use thiserror::Error;

use crate::model::Metric;

/// The first rule a submission payload violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name was missing, not a string, or blank after trimming.
    #[error("Name is required.")]
    NameRequired,

    /// A rating did not coerce to an integer in `1..=10`.
    #[error("Sliders must be integers 1–10.")]
    RatingOutOfRange { metric: Metric },
}

impl ValidationError {
    /// Name of the payload field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name",
            ValidationError::RatingOutOfRange { metric } => metric.as_str(),
        }
    }
}
