use std::sync::Arc;
use std::time::Duration;

use crate::client::core::SwiftxClient;
use crate::client::policy::RetryPolicy;
use crate::config::ClientConfig;
use crate::telemetry::CallSink;
use crate::transport::{HttpTransport, SignatureBuilder, Transport};
use crate::Result;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct SwiftxClientBuilder {
    config: Option<ClientConfig>,
    transport: Option<Arc<dyn Transport>>,
    retry_policy: RetryPolicy,
    sink: Arc<dyn CallSink>,
    user_agent: String,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl SwiftxClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            retry_policy: RetryPolicy::default(),
            sink: crate::telemetry::noop_sink(),
            user_agent: default_user_agent(),
            base_url_override: None,
        }
    }

    /// Set the client configuration. When unset, `build` reads `SWIFTX_*` env vars.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Inject a transport. Default is [`HttpTransport`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Shorthand for a policy with the given budget and backoff bounds.
    pub fn retries(mut self, max_retries: u32, min_delay: Duration, max_delay: Duration) -> Self {
        self.retry_policy = RetryPolicy::new(max_retries, min_delay, max_delay);
        self
    }

    /// Inject a call sink. Default is a no-op sink.
    pub fn call_sink(mut self, sink: Arc<dyn CallSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom base URL (e.g., for testing with a mock server).
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<SwiftxClient> {
        let config = match self.config {
            Some(cfg) => cfg.validated()?,
            None => ClientConfig::from_env()?,
        };

        let base_url = self
            .base_url_override
            .unwrap_or_else(|| config.env.base_url().to_string())
            .trim_end_matches('/')
            .to_string();

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(&config, &self.user_agent)?),
        };

        Ok(SwiftxClient {
            signer: SignatureBuilder::new(config.credentials()),
            config,
            base_url,
            transport,
            policy: self.retry_policy,
            sink: self.sink,
        })
    }
}

impl Default for SwiftxClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_user_agent() -> String {
    format!("swiftx-rust/{}", env!("CARGO_PKG_VERSION"))
}
