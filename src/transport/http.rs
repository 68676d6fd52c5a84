use std::collections::HashMap;
use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Proxy;

use super::{OutgoingRequest, RawResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::error::{Error, ErrorContext};
use crate::Result;

/// Fixed on every request; the lower-case form is what `HeaderName::from_static` accepts.
pub const HEADER_APP_KEY: &str = "x-app-key";

/// reqwest-backed transport. Fixed headers are installed once on the client.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, header_value("user_agent", user_agent)?);
        headers.insert(
            HeaderName::from_static(HEADER_APP_KEY),
            header_value("app_key", &config.app_key)?,
        );

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .pool_max_idle_per_host(
                env::var("SWIFTX_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(8),
            )
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Ok(proxy_url) = env::var("SWIFTX_PROXY_URL") {
            if let Ok(proxy) = Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder.build().map_err(|e| {
            Error::configuration_with_context(
                format!("failed to build HTTP client: {e}"),
                ErrorContext::new().with_source("http_transport"),
            )
        })?;

        Ok(Self { client })
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid header value: {e}"),
            ErrorContext::new().with_field_path(field),
        )
    })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: OutgoingRequest) -> std::result::Result<RawResponse, TransportError> {
        let mut req = self
            .client
            .request(request.method, &request.url)
            .body(request.body);
        for (k, v) in &request.headers {
            req = req.header(k.as_str(), v.as_str());
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let headers: HashMap<String, String> = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = resp.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
