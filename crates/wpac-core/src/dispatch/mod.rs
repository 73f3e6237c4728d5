//! Request dispatch: the single `POST /analyze` exchange.
//!
//! Builds the form-encoded call with the curl crate, runs it to completion
//! exactly once (no retries, no timeout, no cancellation), and classifies
//! the result. The blocking transfer should be wrapped in `spawn_blocking`
//! when called from async code.

mod classify;

use crate::model::{AnalysisRequest, AnalysisResult};
use std::sync::atomic::{AtomicBool, Ordering};

/// Fixed user-facing message for transport failures; the underlying cause
/// is logged, never shown.
pub const TRANSPORT_MESSAGE: &str = "Failed to connect to the server";

/// Fallback message when an error response carries no usable text.
pub const GENERIC_FALLBACK_MESSAGE: &str = "Error occurred while analyzing the URL";

/// Fixed user-facing message when a 2xx body does not match the result shape.
pub const MALFORMED_MESSAGE: &str = "Server returned an unreadable response";

/// Fixed user-facing message when a submission overlaps one in flight.
pub const IN_FLIGHT_MESSAGE: &str = "A request is already in progress";

/// Classified result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx with a decodable result payload.
    Success(AnalysisResult),
    /// Non-2xx with the structured upstream error shape.
    Upstream { status_code: u16, description: String },
    /// Non-2xx with a bare error message (or the fixed fallback).
    Generic(String),
    /// The exchange itself failed, or an error response had no decodable body.
    Transport(String),
    /// 2xx whose body did not decode as an analysis result.
    Malformed(String),
    /// Rejected because another submission was already outstanding.
    InFlight,
}

/// Transport-level failure, kept for the log only; users see the fixed
/// messages above.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Curl reported an error (resolve, connect, send/recv).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// A response arrived but its body did not decode as the expected shape.
    #[error("undecodable response body (HTTP {status}): {source}")]
    Undecodable {
        status: u32,
        source: serde_json::Error,
    },
}

struct HttpResponse {
    status: u32,
    body: Vec<u8>,
}

/// Performs analyze submissions against one endpoint. At most one request
/// may be outstanding per dispatcher; an overlapping `submit` returns
/// [`Outcome::InFlight`] instead of queueing.
pub struct Dispatcher {
    endpoint: String,
    user_agent: Option<String>,
    in_flight: AtomicBool,
}

/// Releases the in-flight token on every exit path out of `submit`.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Dispatcher {
    pub fn new(endpoint: &str, user_agent: Option<String>) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            user_agent,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submits `url` for analysis and classifies the response.
    ///
    /// Precondition: `url` is non-empty after trimming. Validity beyond
    /// emptiness is not re-checked here; the server performs its own
    /// validation and answers with a structured error.
    pub fn submit(&self, url: &str) -> Outcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Outcome::InFlight;
        }
        let _guard = InFlightGuard(&self.in_flight);

        let request = AnalysisRequest::new(url);
        tracing::debug!(url = %request.url, "dispatching analyze request");
        match self.perform(&request.form_body()) {
            Ok(response) => classify::classify(response.status, &response.body),
            Err(err) => {
                tracing::warn!(error = %err, "analyze request failed in transport");
                Outcome::Transport(TRANSPORT_MESSAGE.to_string())
            }
        }
    }

    fn perform(&self, body: &str) -> Result<HttpResponse, TransferError> {
        let mut collected = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&format!("{}/analyze", self.endpoint))?;
        easy.post(true)?;
        easy.post_fields_copy(body.as_bytes())?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        let mut headers = curl::easy::List::new();
        headers.append("Content-Type: application/x-www-form-urlencoded")?;
        easy.http_headers(headers)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                collected.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse {
            status,
            body: collected,
        })
    }
}
