//! Classify an HTTP status and response body into an [`Outcome`].

use super::{
    Outcome, TransferError, GENERIC_FALLBACK_MESSAGE, MALFORMED_MESSAGE, TRANSPORT_MESSAGE,
};
use crate::model::{AnalysisResult, ErrorBody};

/// Classification order: success status with a decodable result wins; a
/// failure status is mapped through the error body (structured shape first);
/// an undecodable body on a failure status counts as a transport failure,
/// on a success status as the distinguishable malformed kind.
pub(crate) fn classify(status: u32, body: &[u8]) -> Outcome {
    if (200..300).contains(&status) {
        match serde_json::from_slice::<AnalysisResult>(body) {
            Ok(result) => Outcome::Success(result),
            Err(source) => {
                let err = TransferError::Undecodable { status, source };
                tracing::warn!(error = %err, "success response did not match the result shape");
                Outcome::Malformed(MALFORMED_MESSAGE.to_string())
            }
        }
    } else {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody::Upstream {
                status_code,
                description,
            }) => Outcome::Upstream {
                status_code,
                description,
            },
            Ok(ErrorBody::Generic { error }) => {
                if error.is_empty() {
                    Outcome::Generic(GENERIC_FALLBACK_MESSAGE.to_string())
                } else {
                    Outcome::Generic(error)
                }
            }
            Err(source) => {
                let err = TransferError::Undecodable { status, source };
                tracing::warn!(error = %err, "error response had no decodable body");
                Outcome::Transport(TRANSPORT_MESSAGE.to_string())
            }
        }
    }
}
