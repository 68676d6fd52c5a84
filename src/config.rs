//! 客户端配置：环境、超时与凭据，支持文件与环境变量加载。
//!
//! Client configuration.
//!
//! A [`ClientConfig`] can be built in code, loaded from a JSON or YAML file,
//! or read from `SWIFTX_*` environment variables. When the app secret is not
//! in the environment it is looked up in the OS keyring (service `swiftx`,
//! user = app key).

use std::env;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use keyring::Entry;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorContext};
use crate::Result;

pub const PROD_BASE_URL: &str = "https://prod.open.swiftx-express.com/api/v2/openapi";
pub const TEST_BASE_URL: &str = "https://test.open.swiftx-express.com/api/v2/openapi";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const KEYRING_SERVICE: &str = "swiftx";

/// Deployment environment. Only `Prod` talks to the production host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Prod,
    #[default]
    Test,
    Dev,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Prod => PROD_BASE_URL,
            _ => TEST_BASE_URL,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Some(Environment::Prod),
            "test" => Some(Environment::Test),
            "dev" => Some(Environment::Dev),
            _ => None,
        }
    }
}

/// App key / secret pair. The secret never appears in `Debug` output and is
/// never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_key: String,
    app_secret: String,
}

impl Credentials {
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }

    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &self.app_key)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Log request and response bodies at debug level.
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub env: Environment,
    /// Overall deadline per call in seconds, retries included. 0 means the default.
    #[serde(default, alias = "timeout")]
    pub timeout_secs: u64,
    #[serde(alias = "account", alias = "appKey")]
    pub app_key: String,
    #[serde(default, alias = "password", alias = "appSecret", skip_serializing)]
    pub app_secret: String,
    #[serde(default, alias = "callbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("debug", &self.debug)
            .field("env", &self.env)
            .field("timeout_secs", &self.timeout_secs)
            .field("app_key", &self.app_key)
            .field("app_secret", &"<redacted>")
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            debug: false,
            env: Environment::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            callback_url: None,
        }
    }

    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Overall call deadline.
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            n => Duration::from_secs(n),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.app_key.clone(), self.app_secret.clone())
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg: ClientConfig = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&raw).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid YAML config: {e}"),
                    ErrorContext::new()
                        .with_source("config_loader")
                        .with_details(path.display().to_string()),
                )
            })?,
            _ => serde_json::from_str(&raw).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid JSON config: {e}"),
                    ErrorContext::new()
                        .with_source("config_loader")
                        .with_details(path.display().to_string()),
                )
            })?,
        };
        cfg.validated()
    }

    /// Load from `SWIFTX_*` environment variables, falling back to the
    /// keyring for the secret.
    pub fn from_env() -> Result<Self> {
        let app_key = env::var("SWIFTX_APP_KEY").unwrap_or_default();
        let app_secret = env::var("SWIFTX_APP_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| Self::secret_from_keyring(&app_key))
            .unwrap_or_default();

        let mut cfg = ClientConfig::new(app_key, app_secret);
        if let Ok(raw) = env::var("SWIFTX_ENV") {
            cfg.env = Environment::parse(&raw).ok_or_else(|| {
                Error::configuration_with_context(
                    format!("unknown environment {raw:?}"),
                    ErrorContext::new()
                        .with_field_path("SWIFTX_ENV")
                        .with_details("expected prod, test or dev"),
                )
            })?;
        }
        if let Some(secs) = env::var("SWIFTX_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            cfg.timeout_secs = secs;
        }
        cfg.debug = env::var("SWIFTX_DEBUG")
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);
        cfg.callback_url = env::var("SWIFTX_CALLBACK_URL").ok().filter(|s| !s.is_empty());
        cfg.validated()
    }

    fn secret_from_keyring(app_key: &str) -> Option<String> {
        if app_key.is_empty() {
            return None;
        }
        let entry = Entry::new(KEYRING_SERVICE, app_key).ok()?;
        entry.get_password().ok()
    }

    /// Checks that credentials are present.
    pub fn validated(self) -> Result<Self> {
        if self.app_key.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "app key must not be empty",
                ErrorContext::new().with_field_path("app_key"),
            ));
        }
        if self.app_secret.is_empty() {
            return Err(Error::configuration_with_context(
                "app secret must not be empty",
                ErrorContext::new().with_field_path("app_secret"),
            ));
        }
        Ok(self)
    }
}
