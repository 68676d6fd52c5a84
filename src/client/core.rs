use std::sync::Arc;

use crate::client::builder::SwiftxClientBuilder;
use crate::client::orders::Orders;
use crate::client::ping::Ping;
use crate::client::policy::RetryPolicy;
use crate::config::ClientConfig;
use crate::telemetry::CallSink;
use crate::transport::{SignatureBuilder, Transport};
use crate::Result;

/// SwiftX open platform client.
///
/// Holds only immutable configuration and shared handles; it is `Send + Sync`
/// and can be used from many tasks at once. All signing and retry state is
/// local to a call.
pub struct SwiftxClient {
    pub(crate) config: ClientConfig,
    pub(crate) base_url: String,
    pub(crate) signer: SignatureBuilder,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) policy: RetryPolicy,
    pub(crate) sink: Arc<dyn CallSink>,
}

impl SwiftxClient {
    /// Client over the default HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        SwiftxClientBuilder::new().config(config).build()
    }

    pub fn builder() -> SwiftxClientBuilder {
        SwiftxClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Order creation, cancellation and tracking.
    pub fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }

    /// Connectivity check.
    pub fn ping(&self) -> Ping<'_> {
        Ping::new(self)
    }
}
