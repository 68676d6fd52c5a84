//! End-to-end tests against a mockito server through the real HTTP transport.

mod integration;

use integration::fixtures::{create_order_ok_body, create_order_request};
use integration::mock_server::MockServerFixture;
use mockito::Matcher;
use serde_json::json;
use swiftx_rust::ErrorKind;

#[tokio::test]
async fn ping_sends_signed_get_with_query() {
    let mut fx = MockServerFixture::new().await;
    let mock = fx
        .mock_signed("GET", "/pingPong", 200, "42")
        .await
        .match_query(Matcher::UrlEncoded("i".into(), "42".into()))
        .expect(1)
        .create_async()
        .await;

    let client = fx.client();
    assert_eq!(client.ping().pong(42).await.unwrap(), 42);
    mock.assert_async().await;
}

#[tokio::test]
async fn create_order_end_to_end() {
    let mut fx = MockServerFixture::new().await;
    let mock = fx
        .mock_signed(
            "POST",
            "/createOrderAndGetLabelPdfBase64",
            200,
            &create_order_ok_body(),
        )
        .await
        .match_body(Matcher::PartialJson(json!({
            "orderScope": "DOMESTIC",
            "serviceType": "EXP",
            "packageInfo": {
                "senderAddress": {"regionCode": "US", "stateProvince": "CA", "postalCode": "91761"},
                "recipientAddress": {"city": "Fort Worth", "stateProvince": "TX"}
            },
            "shippingLabelInfo": {"orderNumber": "TEST-ORDER-12345"}
        })))
        .expect(1)
        .create_async()
        .await;

    let client = fx.client();
    let order = client.orders().create(&create_order_request()).await.unwrap();

    assert_eq!(order.customer_order_number, "TEST-ORDER-12345");
    assert_eq!(order.shipment_number, "SX100200300");
    assert_eq!(order.tracking_number.as_deref(), Some("EXT-77"));
    assert!(!order.shipping_label.is_empty());
    assert!(order.label_pdf().unwrap().starts_with(b"%PDF"));
    mock.assert_async().await;
}

#[tokio::test]
async fn tracking_batch_posts_number_list() {
    let mut fx = MockServerFixture::new().await;
    let body = r#"[
        {"result":{"success":true,"message":""},"trackingNo":"SX1","trackingEventList":[
            {"event":"IN_TRANSIT","description":"Departed facility","localTime":"2024-05-01 08:00:00","localGmtOffset":"-07:00","location":"Ontario"}
        ]},
        {"result":{"success":false,"message":"not found"},"trackingNo":"SX2","trackingEventList":[]}
    ]"#;
    let mock = fx
        .mock_signed("POST", "/batchGetTrackingInfo", 200, body)
        .await
        .match_body(Matcher::Json(json!({"trackingNoList": ["SX1", "SX2"]})))
        .create_async()
        .await;

    let results = fx.client().orders().tracking(&["SX1", "SX2"]).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].latest_event().unwrap().event, "IN_TRANSIT");
    assert!(!results[1].result.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn forbidden_hits_server_once() {
    let mut fx = MockServerFixture::new().await;
    let mock = fx
        .mock_signed(
            "POST",
            "/cancelOrder",
            403,
            r#"{"code":403,"message":"Forbidden","requestId":"abc"}"#,
        )
        .await
        .expect(1)
        .create_async()
        .await;

    let err = fx.client().orders().cancel("SX1").await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.kind, ErrorKind::Forbidden);
    assert_eq!(api.message, "insufficient permission");
    assert_eq!(api.request_id.as_deref(), Some("abc"));
    mock.assert_async().await;
}

#[tokio::test]
async fn persistent_rate_limit_makes_three_attempts() {
    let mut fx = MockServerFixture::new().await;
    let mock = fx
        .mock_signed("GET", "/pingPong", 429, r#"{"code":429,"message":"Too Many Requests"}"#)
        .await
        .expect(3)
        .create_async()
        .await;

    let err = fx.client().ping().pong(1).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::RateLimited));
    assert_eq!(err.to_string(), "rate limit exceeded");
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_reports_invalid_signature() {
    let mut fx = MockServerFixture::new().await;
    let _mock = fx
        .mock_signed("GET", "/pingPong", 401, "")
        .await
        .create_async()
        .await;

    let err = fx.client().ping().pong(1).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Unauthorized));
    assert_eq!(err.to_string(), "invalid signature");
}
