//! 传输层：发送已签名请求的抽象，默认实现基于 reqwest。
//!
//! Transport layer.
//!
//! The pipeline talks to the network only through the [`Transport`] trait, so
//! tests can script responses and failures. [`HttpTransport`] is the
//! production implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;

pub mod http;
pub mod signer;

pub use http::HttpTransport;
pub use signer::{Signature, SignatureBuilder};

/// A fully built request: what is signed is what is sent.
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: reqwest::Method,
    /// Absolute URL including the canonical query string.
    pub url: String,
    pub body: Bytes,
    /// Per-attempt headers (signature, request id).
    pub headers: Vec<(String, String)>,
}

impl OutgoingRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A complete response with its body already read.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    /// Lower-cased header names.
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse, TransportError>;
}

/// Failure before a response was received.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Request-construction errors will fail identically on every attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Http(e) => !e.is_builder(),
            TransportError::Connection(_) => true,
            TransportError::Other(_) => false,
        }
    }
}
