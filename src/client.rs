//! Client interface for the SwiftX open platform.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod execution;
pub mod normalizer;
pub mod orders;
pub mod ping;
mod policy;
pub mod types;

pub use builder::SwiftxClientBuilder;
pub use core::SwiftxClient;
pub use execution::HEADER_REQUEST_ID;
pub use normalizer::{ErrorNormalizer, NormalizedError};
pub use orders::Orders;
pub use ping::Ping;
pub use policy::RetryPolicy;
pub use types::{ApiRequest, CallStats, CancelHandle};
