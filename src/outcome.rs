//! Attempt outcome type

use crate::response::TransportResponse;
use crate::traits::TransportError;

/// The result of one attempt: a response or an error, never both
///
/// Immutable once produced. Transport failures are captured here rather
/// than propagated, so a failed attempt never terminates the run.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// The transport returned a response (of any status)
    Success(TransportResponse),

    /// The transport failed before producing a response
    Failure(TransportError),
}

impl AttemptOutcome {
    /// Check whether this outcome carries a response
    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Success(_))
    }

    /// Get the response, if any
    pub fn response(&self) -> Option<&TransportResponse> {
        match self {
            AttemptOutcome::Success(response) => Some(response),
            AttemptOutcome::Failure(_) => None,
        }
    }

    /// Get the error, if any
    pub fn error(&self) -> Option<&TransportError> {
        match self {
            AttemptOutcome::Success(_) => None,
            AttemptOutcome::Failure(error) => Some(error),
        }
    }

    /// Convert into a plain `Result`
    pub fn into_result(self) -> Result<TransportResponse, TransportError> {
        match self {
            AttemptOutcome::Success(response) => Ok(response),
            AttemptOutcome::Failure(error) => Err(error),
        }
    }
}

impl From<Result<TransportResponse, TransportError>> for AttemptOutcome {
    fn from(result: Result<TransportResponse, TransportError>) -> Self {
        match result {
            Ok(response) => AttemptOutcome::Success(response),
            Err(error) => AttemptOutcome::Failure(error),
        }
    }
}
