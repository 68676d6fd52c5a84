//! # swiftx-rust
//!
//! SwiftX Express 开放平台的 Rust 客户端：请求签名、请求校验、有界重试与统一错误分类。
//!
//! Signed API client for the SwiftX Express open platform (orders, labels,
//! tracking).
//!
//! ## Overview
//!
//! Every call goes through one authenticated-request pipeline:
//!
//! 1. **Validation**: the typed request is validated locally; failures never
//!    reach the network ([`validation`]).
//! 2. **Signing**: each attempt is signed with HMAC-SHA256 over the exact
//!    method, path, query and body sent ([`transport::signer`]).
//! 3. **Retry**: transport failures and rate limiting are retried with bounded
//!    exponential backoff, all under one call deadline ([`client::RetryPolicy`]).
//! 4. **Normalization**: transport errors, status codes and application
//!    envelopes map onto one taxonomy ([`error_code::ErrorKind`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swiftx_rust::{ClientConfig, Environment, SwiftxClient};
//!
//! #[tokio::main]
//! async fn main() -> swiftx_rust::Result<()> {
//!     let config = ClientConfig::new("your-app-key", "your-app-secret")
//!         .with_env(Environment::Test);
//!     let client = SwiftxClient::new(config)?;
//!
//!     assert_eq!(client.ping().pong(7).await?, 7);
//!
//!     for result in client.orders().tracking(&["SX0001"]).await? {
//!         println!("{}: {} events", result.tracking_no, result.tracking_event_list.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, pipeline, retry policy, error normalizer |
//! | [`config`] | Environment, timeout and credentials |
//! | [`transport`] | Transport trait, reqwest transport, request signing |
//! | [`types`] | Request / response payloads |
//! | [`validation`] | Validation trait, rules and error tree |
//! | [`telemetry`] | Optional per-call stats collection |

pub mod client;
pub mod config;
pub mod error_code;
pub mod telemetry;
pub mod transport;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use client::{CallStats, CancelHandle, NormalizedError, RetryPolicy};
pub use client::{SwiftxClient, SwiftxClientBuilder};
pub use config::{ClientConfig, Credentials, Environment};
pub use error_code::ErrorKind;
pub use telemetry::CallSink;
pub use validation::{Validate, ValidationErrors};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{CancelReason, Error, ErrorContext};
