//! Tracking query and results.

use serde::{Deserialize, Serialize};

use super::{null_as_default, OperationResult, ResponseEnvelope};
use crate::validation::{rules, Validate, ValidationErrors};

/// Body of `POST /batchGetTrackingInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRequest {
    pub tracking_no_list: Vec<String>,
}

impl TrackingRequest {
    pub fn new<I, S>(tracking_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracking_no_list: tracking_numbers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for TrackingRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        if self.tracking_no_list.is_empty() {
            errs.add("trackingNoList", "tracking number list must not be empty");
        } else {
            let mut entries = ValidationErrors::new();
            for (idx, no) in self.tracking_no_list.iter().enumerate() {
                entries.check(
                    format!("[{idx}]"),
                    rules::required(no, "tracking number must not be empty"),
                );
            }
            errs.merge("trackingNoList", entries);
        }
        errs.into_result()
    }
}

/// One event in a shipment's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub event: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_gmt_offset: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub iso3166_cc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub iso3166_sc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city_uppercase: String,
    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pod_image_count: u32,
}

/// Per-shipment tracking result. A failed lookup for one number is reported
/// in `result` and does not fail the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingResult {
    #[serde(deserialize_with = "null_as_default")]
    pub result: OperationResult,
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_event_list: Vec<TrackingEvent>,
}

impl TrackingResult {
    pub fn latest_event(&self) -> Option<&TrackingEvent> {
        self.tracking_event_list.first()
    }
}

impl ResponseEnvelope for Vec<TrackingResult> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_rejected() {
        let err = TrackingRequest::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "tracking number list must not be empty");
    }

    #[test]
    fn blank_entry_reported_by_index() {
        let err = TrackingRequest::new(["SX1", " "]).validate().unwrap_err();
        assert_eq!(
            err.flatten(),
            vec![(
                "trackingNoList[1]".to_string(),
                "tracking number must not be empty".to_string()
            )]
        );
    }

    #[test]
    fn decodes_provider_payload() {
        let raw = r#"[{"result":{"success":true,"message":"ok"},"trackingNo":"SX1",
            "trackingEventList":[{"event":"DELIVERED","description":"Delivered","localTime":"2024-05-01 10:00:00",
            "localGmtOffset":"-05:00","location":"Fort Worth","iso3166Cc":"US","iso3166Sc":"TX",
            "cityUppercase":"FORT WORTH","postalCode":"76118","podImageCount":1}]}]"#;
        let results: Vec<TrackingResult> = serde_json::from_str(raw).unwrap();
        assert_eq!(results.len(), 1);
        let latest = results[0].latest_event().unwrap();
        assert_eq!(latest.event, "DELIVERED");
        assert_eq!(latest.iso3166_sc, "TX");
        assert_eq!(latest.pod_image_count, 1);
    }
}
