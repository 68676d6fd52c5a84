//! Request fixtures mirroring a real domestic US shipment

use swiftx_rust::types::constants::*;
use swiftx_rust::types::{
    Address, CreateOrderRequest, InsuranceService, PackageInfo, ShippingLabelInfo, SkuLine, Value,
};

pub const APP_KEY: &str = "test-app-key";
pub const APP_SECRET: &str = "test-app-secret";

pub fn sender() -> Address {
    Address {
        name: "ZEB2".into(),
        phone_number: "1096398373".into(),
        street_address: "2078 E Francis Street".into(),
        city: "Ontario".into(),
        state_province: "CA".into(),
        postal_code: "91761".into(),
        region_code: "US".into(),
        ..Default::default()
    }
}

pub fn recipient() -> Address {
    Address {
        name: "Dak Jaech".into(),
        phone_number: "+1 347-447-3197 ext. 07360".into(),
        street_address: "W1302 WELCH RD".into(),
        city: "Fort Worth".into(),
        state_province: "TX".into(),
        postal_code: "76118".into(),
        region_code: "US".into(),
        ..Default::default()
    }
}

pub fn create_order_request() -> CreateOrderRequest {
    CreateOrderRequest {
        order_scope: ORDER_SCOPE_DOMESTIC.into(),
        service_type: SERVICE_TYPE_EXP.into(),
        delivery_method: DELIVERY_METHOD_HDY.into(),
        cooperation_method: COOPERATION_METHOD_MERCHANT.into(),
        insurance_service: Some(InsuranceService {
            is_insured: false,
            insured_value: Value::new(100.0, "USD"),
        }),
        package_info: PackageInfo {
            sender_address: sender(),
            recipient_address: recipient(),
            use_imperial_unit: false,
            weight: 1.5,
            length: 10.0,
            width: 10.0,
            height: 5.0,
            value: Value::new(100.0, "USD"),
            customer_name: "测试客户".into(),
            store_name: "测试店铺".into(),
            sku_list: vec![
                SkuLine::new("测试 SKU 1", 1).code("SKU001").value(50.0),
                SkuLine::new("测试 SKU 2", 2).code("SKU002").value(25.0),
            ],
        },
        shipping_label_info: ShippingLabelInfo {
            order_number: "TEST-ORDER-12345".into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// `%PDF-1.4\n` base64 encoded.
pub const LABEL_BASE64: &str = "JVBERi0xLjQK";

pub fn create_order_ok_body() -> String {
    format!(
        r#"{{"result":{{"success":true,"message":"success"}},"trackingNo":"SX100200300","externalTrackingNumber":"EXT-77","pdfBase64":"{LABEL_BASE64}"}}"#
    )
}
