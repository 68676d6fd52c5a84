//! 错误归一化：把传输错误、HTTP 状态码和业务结果映射到统一的错误种类。
//!
//! Error normalization.
//!
//! Checks run in a fixed order: transport failure (no response), then
//! non-success status, then the application envelope of a successful
//! response. Retryability is decided here once and only read by the retry
//! policy.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error_code::ErrorKind;
use crate::transport::{RawResponse, TransportError};
use crate::types::{null_as_default, OperationResult};

const UNKNOWN_MESSAGE: &str = "unknown error";
const REJECTED_MESSAGE: &str = "request rejected";

/// A classified failure from the platform or the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedError {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// Platform request id, from the error body or the `x-request-id` header.
    pub request_id: Option<String>,
    pub retryable: bool,
    /// Server-provided `Retry-After`.
    pub retry_after: Option<Duration>,
}

impl NormalizedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            request_id: None,
            retryable: kind.retryable(),
            retry_after: None,
        }
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NormalizedError {}

/// Error body shape `{code, message, requestId}`; `code` is not used.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProviderErrorBody {
    #[serde(deserialize_with = "null_as_default")]
    message: String,
    #[serde(deserialize_with = "null_as_default")]
    request_id: String,
}

pub struct ErrorNormalizer;

impl ErrorNormalizer {
    /// Full classification of one attempt. `None` means success.
    pub fn normalize(
        outcome: std::result::Result<&RawResponse, &TransportError>,
        envelope: Option<&OperationResult>,
    ) -> Option<NormalizedError> {
        match outcome {
            Err(e) => Some(Self::from_transport(e)),
            Ok(resp) => Self::from_response(resp)
                .or_else(|| envelope.and_then(|o| Self::from_envelope(o, resp))),
        }
    }

    pub fn from_transport(err: &TransportError) -> NormalizedError {
        let mut e = NormalizedError::new(ErrorKind::TransportFailure, err.to_string());
        e.retryable = err.is_retryable();
        e
    }

    /// Classifies a non-success status. Returns `None` for 2xx.
    pub fn from_response(resp: &RawResponse) -> Option<NormalizedError> {
        if resp.is_success() {
            return None;
        }
        let kind = ErrorKind::from_http_status(resp.status);
        let body: ProviderErrorBody = serde_json::from_slice(&resp.body).unwrap_or_default();

        let message = match kind.fixed_message() {
            Some(m) => m.to_string(),
            None => {
                let m = body.message.trim();
                if m.is_empty() {
                    UNKNOWN_MESSAGE.to_string()
                } else {
                    m.to_string()
                }
            }
        };

        let mut e = NormalizedError::new(kind, message);
        e.status = Some(resp.status);
        e.request_id = non_empty(&body.request_id).or_else(|| header_request_id(resp));
        if kind == ErrorKind::RateLimited {
            e.retry_after = retry_after(resp);
        }
        Some(e)
    }

    /// Classifies an application-level `result.success == false`.
    pub fn from_envelope(outcome: &OperationResult, resp: &RawResponse) -> Option<NormalizedError> {
        if outcome.success {
            return None;
        }
        let message = non_empty(&outcome.message).unwrap_or_else(|| REJECTED_MESSAGE.to_string());
        let mut e = NormalizedError::new(ErrorKind::RemoteRejected, message);
        e.status = Some(resp.status);
        e.request_id = header_request_id(resp);
        Some(e)
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

pub(crate) fn header_request_id(resp: &RawResponse) -> Option<String> {
    ["x-request-id", "request-id"]
        .iter()
        .find_map(|h| resp.header(h).and_then(non_empty))
}

/// Only the `Retry-After: <seconds>` form is supported.
fn retry_after(resp: &RawResponse) -> Option<Duration> {
    let secs: u64 = resp.header("retry-after")?.trim().parse().ok()?;
    Some(Duration::from_secs(secs))
}
