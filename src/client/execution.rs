//! 请求执行逻辑：签名、发送、重试、错误归一化与解码。
//!
//! Request execution.
//!
//! One call runs under a single deadline (the configured timeout) covering
//! every attempt and every backoff sleep. Each attempt is signed afresh over
//! the exact method, path, query and body that go on the wire.

use std::future::Future;

use serde::de::DeserializeOwned;
use tokio::time::{sleep, sleep_until, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::core::SwiftxClient;
use super::normalizer::{header_request_id, ErrorNormalizer};
use super::policy::Decision;
use super::types::{ApiRequest, CallStats, CancelHandle};
use crate::error::{CancelReason, Error, ErrorContext};
use crate::transport::signer::canonical_query;
use crate::transport::OutgoingRequest;
use crate::types::ResponseEnvelope;
use crate::Result;

pub const HEADER_REQUEST_ID: &str = "X-Request-Id";

impl SwiftxClient {
    /// Execute a call through the full pipeline and decode the body into `T`.
    ///
    /// Validation is the caller's responsibility (endpoint helpers validate
    /// before calling this).
    pub async fn execute<T>(&self, request: ApiRequest, cancel: Option<&CancelHandle>) -> Result<T>
    where
        T: DeserializeOwned + ResponseEnvelope,
    {
        let start = std::time::Instant::now();
        let client_request_id = Uuid::new_v4().to_string();
        let mut stats = CallStats::new(request.path.clone(), client_request_id);

        let outcome = self.run(&request, cancel, &mut stats).await;

        stats.duration_ms = start.elapsed().as_millis();
        if let Err(e) = &outcome {
            stats.error_kind = e.kind();
            info!(
                http_status = stats.http_status,
                error_kind = e.kind().map(|k| k.name()).unwrap_or("none"),
                endpoint = request.path.as_str(),
                retry_count = stats.retry_count,
                duration_ms = stats.duration_ms,
                "swiftx request failed: {}",
                e
            );
        }
        if let Err(e) = self.sink.record(stats).await {
            warn!(error = %e, "call sink rejected stats");
        }
        outcome
    }

    async fn run<T>(
        &self,
        request: &ApiRequest,
        cancel: Option<&CancelHandle>,
        stats: &mut CallStats,
    ) -> Result<T>
    where
        T: DeserializeOwned + ResponseEnvelope,
    {
        let deadline = Instant::now() + self.config.timeout();

        let query = canonical_query(&request.query);
        let mut url = format!("{}{}", self.base_url, request.path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        let signed_path = url::Url::parse(&url)
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid request URL: {e}"),
                    ErrorContext::new()
                        .with_field_path("base_url")
                        .with_details(url.clone()),
                )
            })?
            .path()
            .to_string();
        let body = request.body.clone().unwrap_or_default();
        let method = request.method.as_str();

        if self.config.debug {
            debug!(body = %String::from_utf8_lossy(&body), "swiftx request body");
        }

        let mut attempt: u32 = 0;
        loop {
            let signature = self.signer.build(method, &signed_path, &query, &body)?;
            let mut headers: Vec<(String, String)> = signature
                .headers()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
            headers.push((HEADER_REQUEST_ID.to_string(), stats.client_request_id.clone()));

            let outgoing = OutgoingRequest {
                method: request.method.clone(),
                url: url.clone(),
                body: body.clone(),
                headers,
            };

            debug!(
                method,
                path = signed_path.as_str(),
                attempt,
                request_id = stats.client_request_id.as_str(),
                "swiftx request attempt"
            );

            let sent = guarded(self.transport.send(outgoing), deadline, cancel).await?;

            if let Ok(resp) = &sent {
                stats.http_status = Some(resp.status);
                stats.upstream_request_id = header_request_id(resp);
            }
            // The envelope is only known after decoding; see `decode`.
            let failure = match (ErrorNormalizer::normalize(sent.as_ref(), None), sent) {
                (Some(e), _) => e,
                (None, Ok(resp)) => return self.decode(request, resp),
                (None, Err(e)) => ErrorNormalizer::from_transport(&e),
            };

            match self.policy.decide(&failure, attempt) {
                Decision::Retry { delay } => {
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error_kind = failure.kind.name(),
                        endpoint = request.path.as_str(),
                        "swiftx request failed, retrying"
                    );
                    guarded(sleep(delay), deadline, cancel).await?;
                    stats.retry_count += 1;
                    attempt += 1;
                }
                Decision::Fail => return Err(Error::Api(failure)),
            }
        }
    }

    fn decode<T>(&self, request: &ApiRequest, resp: crate::transport::RawResponse) -> Result<T>
    where
        T: DeserializeOwned + ResponseEnvelope,
    {
        if self.config.debug {
            debug!(
                http_status = resp.status,
                body = %String::from_utf8_lossy(&resp.body),
                "swiftx response body"
            );
        }

        let value: T = serde_json::from_slice(&resp.body).map_err(|e| {
            Error::decode_with_context(
                format!("failed to decode response: {e}"),
                ErrorContext::new()
                    .with_source(request.path.clone())
                    .with_details(format!("http_status: {}", resp.status)),
            )
        })?;

        if let Some(err) = ErrorNormalizer::normalize(Ok(&resp), value.outcome()) {
            return Err(Error::Api(err));
        }
        Ok(value)
    }
}

/// Runs `fut` unless the caller cancels or the deadline passes first.
async fn guarded<F: Future>(
    fut: F,
    deadline: Instant,
    cancel: Option<&CancelHandle>,
) -> Result<F::Output> {
    let cancelled = async {
        match cancel {
            Some(handle) => handle.cancelled().await,
            None => std::future::pending::<()>().await,
        }
    };
    tokio::select! {
        biased;
        _ = cancelled => Err(Error::Cancelled { reason: CancelReason::Caller }),
        _ = sleep_until(deadline) => Err(Error::Cancelled { reason: CancelReason::Deadline }),
        out = fut => Ok(out),
    }
}
