//! Create-order request tree, cancel request and the resulting [`Order`].

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::constants::{
    COOPERATION_METHODS, CURRENCY_CODES, DELIVERY_METHODS, DELIVERY_METHOD_SPU, ORDER_SCOPES,
    SERVICE_TYPES,
};
use super::{null_as_default, Address, OperationResult, ResponseEnvelope};
use crate::validation::{rules, Validate, ValidationErrors};

/// An amount of money.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub amount: f64,
    /// One of `USD`, `CAD`, `HKD`, `CNY`.
    pub currency_code: String,
}

impl Value {
    pub fn new(amount: f64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }
}

impl Validate for Value {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.check(
            "amount",
            rules::required_number(self.amount, "amount must not be empty")
                .and_then(|_| rules::min_number(self.amount, 0.0, "amount must not be negative")),
        );
        errs.check(
            "currencyCode",
            rules::required(&self.currency_code, "currency code must not be empty")
                .and_then(|_| rules::one_of(&self.currency_code, CURRENCY_CODES, "currency code")),
        );
        errs.into_result()
    }
}

/// One SKU line inside a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuLine {
    pub name: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency_code: String,
}

impl SkuLine {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            ..Default::default()
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = currency_code.into();
        self
    }
}

impl Validate for SkuLine {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.check(
            "name",
            rules::required(&self.name, "SKU name must not be empty").and_then(|_| {
                rules::length(&self.name, 1, 255, "SKU name must not exceed 255 characters")
            }),
        );
        errs.check(
            "quantity",
            rules::required_count(self.quantity, "SKU quantity must not be empty")
                .and_then(|_| rules::min_count(self.quantity, 1, "SKU quantity must be at least 1")),
        );
        errs.check(
            "code",
            rules::when(!self.code.is_empty(), || {
                rules::length(&self.code, 1, 100, "SKU code must not exceed 100 characters")
            }),
        );
        if let Some(value) = self.value {
            errs.check(
                "value",
                rules::min_number(value, 0.0, "SKU unit price must not be negative"),
            );
        }
        errs.check(
            "currencyCode",
            rules::when(!self.currency_code.is_empty(), || {
                rules::one_of(&self.currency_code, CURRENCY_CODES, "currency code")
            }),
        );
        errs.into_result()
    }
}

/// Parcel description. Dimensions are metric unless `use_imperial_unit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub sender_address: Address,
    pub recipient_address: Address,
    #[serde(default)]
    pub use_imperial_unit: bool,
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Declared total value.
    pub value: Value,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub store_name: String,
    pub sku_list: Vec<SkuLine>,
}

impl Validate for PackageInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.nested("senderAddress", &self.sender_address);

        let mut recipient = match self.recipient_address.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        recipient.check(
            "phoneNumber",
            rules::required(
                &self.recipient_address.phone_number,
                "recipient phone number must not be empty",
            ),
        );
        errs.merge("recipientAddress", recipient);

        for (field, label, value) in [
            ("weight", "weight", self.weight),
            ("length", "length", self.length),
            ("width", "width", self.width),
            ("height", "height", self.height),
        ] {
            errs.check(
                field,
                rules::required_number(value, &format!("{label} must not be empty")).and_then(
                    |_| rules::min_number(value, 0.0, &format!("{label} must not be negative")),
                ),
            );
        }
        errs.nested("value", &self.value);

        if self.sku_list.is_empty() {
            errs.add("skuList", "SKU list must not be empty");
        } else {
            errs.each("skuList", &self.sku_list);
        }
        errs.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceService {
    pub is_insured: bool,
    pub insured_value: Value,
}

impl Validate for InsuranceService {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        if self.is_insured {
            errs.nested("insuredValue", &self.insured_value);
        }
        errs.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupService {
    pub is_pickup: bool,
    #[serde(default)]
    pub pickup_start: String,
    #[serde(default)]
    pub pickup_end: String,
}

impl Validate for PickupService {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.check(
            "pickupStart",
            rules::when(self.is_pickup, || {
                rules::required(&self.pickup_start, "pickup start time must not be empty")
            }),
        );
        errs.check(
            "pickupEnd",
            rules::when(self.is_pickup, || {
                rules::required(&self.pickup_end, "pickup end time must not be empty")
            }),
        );
        errs.into_result()
    }
}

/// Data printed on the shipping label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingLabelInfo {
    /// Upstream order number, printed with an `Order: ` prefix.
    pub order_number: String,
    /// Printed with a `Customer note: ` prefix.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub customer_note: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ext_sorting_code: String,
    #[serde(default)]
    pub use_external_tracking_number: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub external_tracking_number: String,
}

impl Validate for ShippingLabelInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.check(
            "orderNumber",
            rules::required(&self.order_number, "order number must not be empty").and_then(|_| {
                rules::length(
                    &self.order_number,
                    1,
                    128,
                    "order number must not exceed 128 characters",
                )
            }),
        );
        errs.check(
            "customerNote",
            rules::length(&self.customer_note, 0, 80, "customer note must not exceed 80 characters"),
        );
        errs.check(
            "extSortingCode",
            rules::length(
                &self.ext_sorting_code,
                0,
                128,
                "external sorting code must not exceed 128 characters",
            ),
        );
        errs.check(
            "externalTrackingNumber",
            rules::when(self.use_external_tracking_number, || {
                rules::required(
                    &self.external_tracking_number,
                    "external tracking number must not be empty",
                )
                .and_then(|_| {
                    rules::length(
                        &self.external_tracking_number,
                        1,
                        64,
                        "external tracking number must not exceed 64 characters",
                    )
                })
            }),
        );
        errs.into_result()
    }
}

/// Free-form extension fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraInfo {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub warehouse: String,
}

/// Body of `POST /createOrderAndGetLabelPdfBase64`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_scope: String,
    pub service_type: String,
    pub delivery_method: String,
    pub cooperation_method: String,
    #[serde(default)]
    pub client_code: String,
    #[serde(default)]
    pub entry_postal_code: String,
    #[serde(default)]
    pub reference_no: String,
    /// Required when delivering to a self-pickup point.
    #[serde(default)]
    pub self_pickup_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_service: Option<InsuranceService>,
    #[serde(default)]
    pub pickup_service: PickupService,
    pub package_info: PackageInfo,
    pub shipping_label_info: ShippingLabelInfo,
    #[serde(default)]
    pub extra_info: ExtraInfo,
}

impl Validate for CreateOrderRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.check(
            "orderScope",
            rules::required(&self.order_scope, "order scope must not be empty")
                .and_then(|_| rules::one_of(&self.order_scope, ORDER_SCOPES, "order scope")),
        );
        errs.check(
            "serviceType",
            rules::required(&self.service_type, "service type must not be empty")
                .and_then(|_| rules::one_of(&self.service_type, SERVICE_TYPES, "service type")),
        );
        errs.check(
            "deliveryMethod",
            rules::required(&self.delivery_method, "delivery method must not be empty").and_then(
                |_| rules::one_of(&self.delivery_method, DELIVERY_METHODS, "delivery method"),
            ),
        );
        errs.check(
            "cooperationMethod",
            rules::required(&self.cooperation_method, "cooperation method must not be empty")
                .and_then(|_| {
                    rules::one_of(
                        &self.cooperation_method,
                        COOPERATION_METHODS,
                        "cooperation method",
                    )
                }),
        );
        errs.check(
            "selfPickupCode",
            rules::when(self.delivery_method == DELIVERY_METHOD_SPU, || {
                rules::required(&self.self_pickup_code, "self-pickup code must not be empty")
            }),
        );
        if let Some(insurance) = &self.insurance_service {
            errs.nested("insuranceService", insurance);
        }
        errs.nested("pickupService", &self.pickup_service);
        errs.nested("packageInfo", &self.package_info);
        errs.nested("shippingLabelInfo", &self.shipping_label_info);
        errs.into_result()
    }
}

/// Raw response of the create-order endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: OperationResult,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracking_no: String,
    #[serde(default)]
    pub external_tracking_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pdf_base64: String,
}

impl ResponseEnvelope for CreateOrderResult {
    fn outcome(&self) -> Option<&OperationResult> {
        Some(&self.result)
    }
}

/// A created order with its shipping label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The caller's order number (`shippingLabelInfo.orderNumber`).
    pub customer_order_number: String,
    /// Platform tracking number.
    pub shipment_number: String,
    /// Partner tracking number, when one was assigned.
    pub tracking_number: Option<String>,
    /// Base64 encoded label PDF.
    pub shipping_label: String,
}

impl Order {
    pub(crate) fn from_result(request: &CreateOrderRequest, result: CreateOrderResult) -> Self {
        Self {
            customer_order_number: request.shipping_label_info.order_number.clone(),
            shipment_number: result.tracking_no,
            tracking_number: result.external_tracking_number.filter(|s| !s.is_empty()),
            shipping_label: result.pdf_base64,
        }
    }

    /// Decodes the label into raw PDF bytes.
    pub fn label_pdf(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(self.shipping_label.trim())
    }
}

/// Body of `POST /cancelOrder`. Only orders not yet picked up can be cancelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub tracking_no: String,
}

impl Validate for CancelOrderRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.check(
            "trackingNo",
            rules::required(&self.tracking_no, "tracking number must not be empty"),
        );
        errs.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::address;
    use crate::types::constants::*;

    fn request() -> CreateOrderRequest {
        let mut recipient = address::sample("US", "TX");
        recipient.city = "Fort Worth".into();
        recipient.postal_code = "76118".into();
        CreateOrderRequest {
            order_scope: ORDER_SCOPE_DOMESTIC.into(),
            service_type: SERVICE_TYPE_EXP.into(),
            delivery_method: DELIVERY_METHOD_HDY.into(),
            cooperation_method: COOPERATION_METHOD_MERCHANT.into(),
            package_info: PackageInfo {
                sender_address: address::sample("US", "CA"),
                recipient_address: recipient,
                weight: 1.5,
                length: 10.0,
                width: 10.0,
                height: 5.0,
                value: Value::new(100.0, "USD"),
                sku_list: vec![SkuLine::new("SKU 1", 1).code("SKU001").value(50.0)],
                ..Default::default()
            },
            shipping_label_info: ShippingLabelInfo {
                order_number: "TEST-ORDER-12345".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn recipient_phone_is_required() {
        let mut req = request();
        req.package_info.recipient_address.phone_number.clear();
        let err = req.validate().unwrap_err();
        assert_eq!(
            err.flatten(),
            vec![(
                "packageInfo.recipientAddress.phoneNumber".to_string(),
                "recipient phone number must not be empty".to_string()
            )]
        );
    }

    #[test]
    fn sender_phone_is_optional() {
        let mut req = request();
        req.package_info.sender_address.phone_number.clear();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn insured_value_checked_only_when_insured() {
        let mut req = request();
        req.insurance_service = Some(InsuranceService {
            is_insured: false,
            insured_value: Value::default(),
        });
        assert!(req.validate().is_ok());

        req.insurance_service = Some(InsuranceService {
            is_insured: true,
            insured_value: Value::new(10.0, "EUR"),
        });
        assert_eq!(req.validate().unwrap_err().to_string(), "invalid currency code EUR");
    }

    #[test]
    fn pickup_window_required_when_pickup() {
        let mut req = request();
        req.pickup_service.is_pickup = true;
        req.pickup_service.pickup_start = "2024-01-01 09:00".into();
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "pickup end time must not be empty"
        );
    }

    #[test]
    fn label_pdf_decodes() {
        let order = Order {
            customer_order_number: "A".into(),
            shipment_number: "B".into(),
            tracking_number: None,
            shipping_label: "JVBERi0xLjQK".into(),
        };
        assert_eq!(order.label_pdf().unwrap(), b"%PDF-1.4\n");
    }

    #[test]
    fn empty_external_tracking_number_is_none() {
        let result: CreateOrderResult = serde_json::from_str(
            r#"{"result":{"success":true,"message":""},"trackingNo":"SX1","externalTrackingNumber":"","pdfBase64":"QQ=="}"#,
        )
        .unwrap();
        let order = Order::from_result(&request(), result);
        assert_eq!(order.customer_order_number, "TEST-ORDER-12345");
        assert_eq!(order.shipment_number, "SX1");
        assert_eq!(order.tracking_number, None);
    }
}
