//! 类型模块：SwiftX 开放平台的请求与响应数据类型。
//!
//! # Types Module
//!
//! Strongly-typed request and response payloads for the SwiftX open platform.
//! Every request type implements [`Validate`](crate::validation::Validate);
//! response types that carry an application-level `result` implement
//! [`ResponseEnvelope`] so the pipeline can surface logical failures.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CreateOrderRequest`] | Order creation payload (package, label, services) |
//! | [`Address`] | Sender / recipient address |
//! | [`Order`] | Created order with base64 label |
//! | [`TrackingResult`] | Per-shipment tracking history |
//! | [`OperationResult`] | `{success, message}` envelope |
//!
//! ## Example
//!
//! ```rust
//! use swiftx_rust::types::{SkuLine, Value};
//! use swiftx_rust::validation::Validate;
//!
//! let line = SkuLine::new("Phone case", 2).code("SKU001").value(4.5);
//! assert!(line.validate().is_ok());
//! assert!(Value::new(0.0, "USD").validate().is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize};

pub mod address;
pub mod constants;
pub mod order;
pub mod tracking;

pub use address::Address;
pub use order::{
    CancelOrderRequest, CreateOrderRequest, ExtraInfo, InsuranceService, Order, PackageInfo,
    PickupService, ShippingLabelInfo, SkuLine, Value,
};
pub use tracking::{TrackingEvent, TrackingRequest, TrackingResult};

/// Application-level outcome embedded in several responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationResult {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

impl ResponseEnvelope for OperationResult {
    fn outcome(&self) -> Option<&OperationResult> {
        Some(self)
    }
}

/// Decoded response bodies that may report a logical failure despite a
/// successful HTTP status.
pub trait ResponseEnvelope {
    fn outcome(&self) -> Option<&OperationResult> {
        None
    }
}

impl ResponseEnvelope for i64 {}
impl ResponseEnvelope for serde_json::Value {}

/// Reads an explicit JSON `null` as the field's default value.
///
/// `#[serde(default)]` only covers absent fields; the platform also sends
/// `null` for empty strings and lists.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
