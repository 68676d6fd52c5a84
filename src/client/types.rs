use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::error_code::ErrorKind;
use crate::Result;

/// Per-call telemetry, reported to the configured
/// [`CallSink`](crate::telemetry::CallSink) when a call completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStats {
    /// Endpoint path, e.g. `/cancelOrder`.
    pub endpoint: String,
    /// Status of the last response received, if any.
    pub http_status: Option<u16>,
    pub retry_count: u32,
    pub duration_ms: u128,
    /// Our `X-Request-Id`, shared by all attempts of the call.
    pub client_request_id: String,
    pub upstream_request_id: Option<String>,
    pub error_kind: Option<ErrorKind>,
}

impl CallStats {
    pub(crate) fn new(endpoint: impl Into<String>, client_request_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_status: None,
            retry_count: 0,
            duration_ms: 0,
            client_request_id: client_request_id.into(),
            upstream_request_id: None,
            error_kind: None,
        }
    }
}

/// Caller-side cancellation for one or more calls.
///
/// Firing the handle interrupts an in-flight attempt or a backoff sleep; the
/// call returns [`Error::Cancelled`](crate::Error::Cancelled).
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub(crate) async fn cancelled(&self) {
        self.token.cancelled().await
    }
}

/// An endpoint call before signing: path relative to the base URL, query
/// pairs and an already-serialized body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post_json<T: Serialize + ?Sized>(path: impl Into<String>, body: &T) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(Bytes::from(serde_json::to_vec(body)?)),
        })
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}
