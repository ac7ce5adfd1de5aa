//! Error boundary of the validation subsystem.
//!
//! Exactly two things can go wrong for a caller: validation found missing or
//! invalid parameters (a normal, recoverable outcome carrying the full
//! [`ValidationFailure`]), or the configuration source itself was
//! inaccessible (fatal, propagated unchanged). Per-parameter misses never
//! appear here; they are aggregated into one error per validation call.

use thiserror::Error;

use crate::source::ConfigSourceError;
use crate::validator::ValidationFailure;

#[derive(Debug, Error)]
pub enum ValidationError<'a> {
    /// One or more required parameters of the step could not be resolved.
    /// Recoverable: render it with the diagnostics layer and move on.
    #[error("{}", .0.summary())]
    MissingOrInvalidParameters(ValidationFailure<'a>),

    /// The configuration source failed. Not retried here.
    #[error("{0}")]
    Source(#[from] ConfigSourceError),
}

impl<'a> ValidationError<'a> {
    /// The carried failure record, when this is a validation outcome.
    pub fn failure(&self) -> Option<&ValidationFailure<'a>> {
        match self {
            Self::MissingOrInvalidParameters(failure) => Some(failure),
            Self::Source(_) => None,
        }
    }
}

pub type ValidationResult<'a, T = ()> = Result<T, ValidationError<'a>>;
