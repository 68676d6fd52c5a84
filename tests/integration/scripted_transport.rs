//! In-memory transport that replays a fixed script of outcomes

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use swiftx_rust::client::SwiftxClient;
use swiftx_rust::telemetry::InMemoryCallSink;
use swiftx_rust::transport::{OutgoingRequest, RawResponse, Transport, TransportError};
use swiftx_rust::ClientConfig;

use super::fixtures::{APP_KEY, APP_SECRET};

pub const BASE_URL: &str = "https://swiftx.test/api/v2/openapi";

pub enum Step {
    Respond(RawResponse),
    Fail(TransportError),
    /// Never completes; only cancellation or the deadline ends the attempt.
    Hang,
}

impl Step {
    pub fn json(status: u16, body: &str) -> Self {
        Step::Respond(RawResponse::new(status, body.to_string()))
    }
}

#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Step>>,
    sent: Mutex<Vec<OutgoingRequest>>,
}

impl ScriptedTransport {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(steps.into()),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent(&self) -> Vec<OutgoingRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(Step::Respond(resp)) => Ok(resp),
            Some(Step::Fail(err)) => Err(err),
            Some(Step::Hang) => std::future::pending().await,
            None => Err(TransportError::Other("script exhausted".into())),
        }
    }
}

/// Client over `transport` with fast retries (2 retries, 10ms..40ms).
pub fn client_with(
    transport: Arc<ScriptedTransport>,
    timeout_secs: u64,
) -> (SwiftxClient, Arc<InMemoryCallSink>) {
    let sink = Arc::new(InMemoryCallSink::new(16));
    let client = SwiftxClient::builder()
        .config(ClientConfig::new(APP_KEY, APP_SECRET).with_timeout_secs(timeout_secs))
        .base_url_override(BASE_URL)
        .transport(transport)
        .retries(2, Duration::from_millis(10), Duration::from_millis(40))
        .call_sink(sink.clone())
        .build()
        .expect("client builds");
    (client, sink)
}
