use super::core::SwiftxClient;
use super::types::{ApiRequest, CancelHandle};
use crate::Result;

pub const PING_PATH: &str = "/pingPong";

/// Health check endpoint.
pub struct Ping<'a> {
    client: &'a SwiftxClient,
    cancel: Option<&'a CancelHandle>,
}

impl<'a> Ping<'a> {
    pub(crate) fn new(client: &'a SwiftxClient) -> Self {
        Self {
            client,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, handle: &'a CancelHandle) -> Self {
        self.cancel = Some(handle);
        self
    }

    /// Returns `i` as echoed by the platform.
    pub async fn pong(&self, i: i64) -> Result<i64> {
        let api = ApiRequest::get(PING_PATH).query("i", i);
        self.client.execute(api, self.cancel).await
    }
}
