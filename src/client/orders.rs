use super::core::SwiftxClient;
use super::types::{ApiRequest, CancelHandle};
use crate::types::order::CreateOrderResult;
use crate::types::{
    CancelOrderRequest, CreateOrderRequest, OperationResult, Order, TrackingRequest,
    TrackingResult,
};
use crate::validation::Validate;
use crate::Result;

pub const CREATE_ORDER_PATH: &str = "/createOrderAndGetLabelPdfBase64";
pub const CANCEL_ORDER_PATH: &str = "/cancelOrder";
pub const TRACKING_PATH: &str = "/batchGetTrackingInfo";

/// Order endpoints. Every request is validated locally before it is sent.
pub struct Orders<'a> {
    client: &'a SwiftxClient,
    cancel: Option<&'a CancelHandle>,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(client: &'a SwiftxClient) -> Self {
        Self {
            client,
            cancel: None,
        }
    }

    /// Make the following calls cancellable through `handle`.
    pub fn with_cancel(mut self, handle: &'a CancelHandle) -> Self {
        self.cancel = Some(handle);
        self
    }

    /// Create an order and fetch its label (base64 PDF).
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<Order> {
        request.validate()?;
        let api = ApiRequest::post_json(CREATE_ORDER_PATH, request)?;
        let result: CreateOrderResult = self.client.execute(api, self.cancel).await?;
        Ok(Order::from_result(request, result))
    }

    /// Cancel an order that has not been picked up yet.
    pub async fn cancel(&self, tracking_no: &str) -> Result<bool> {
        let request = CancelOrderRequest {
            tracking_no: tracking_no.to_string(),
        };
        request.validate()?;
        let api = ApiRequest::post_json(CANCEL_ORDER_PATH, &request)?;
        let _: OperationResult = self.client.execute(api, self.cancel).await?;
        Ok(true)
    }

    /// Tracking history for a batch of shipments.
    pub async fn tracking<S: AsRef<str>>(&self, tracking_numbers: &[S]) -> Result<Vec<TrackingResult>> {
        let request = TrackingRequest::new(tracking_numbers.iter().map(|s| s.as_ref()));
        request.validate()?;
        let api = ApiRequest::post_json(TRACKING_PATH, &request)?;
        self.client.execute(api, self.cancel).await
    }
}
