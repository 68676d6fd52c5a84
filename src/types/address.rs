//! Sender / recipient address.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::constants::REGION_CODES;
use crate::validation::{rules, Validate, ValidationErrors};

static US_STATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}$").expect("static US state pattern"));

/// Postal address. The phone number is optional for senders and required for
/// recipients (see [`super::PackageInfo`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: String,
    /// International dialling code; the region's code is used when zero.
    #[serde(default)]
    pub phone_country_code: u32,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub phone_extension: String,
    /// Address line 2.
    #[serde(default)]
    pub building: String,
    /// Address line 1.
    pub street_address: String,
    /// County for US addresses.
    #[serde(default)]
    pub district: String,
    pub city: String,
    /// Two-letter abbreviation for US states (`CA`, `NY`).
    pub state_province: String,
    /// Up to 10 characters; US ZIP or ZIP+4.
    pub postal_code: String,
    pub region_code: String,
}

impl Validate for Address {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.check(
            "name",
            rules::required(&self.name, "name must not be empty")
                .and_then(|_| rules::length(&self.name, 1, 100, "name must not exceed 100 characters")),
        );
        errs.check(
            "streetAddress",
            rules::required(&self.street_address, "street address must not be empty").and_then(
                |_| {
                    rules::length(
                        &self.street_address,
                        1,
                        255,
                        "street address must not exceed 255 characters",
                    )
                },
            ),
        );
        errs.check("city", rules::required(&self.city, "city must not be empty"));
        errs.check(
            "postalCode",
            rules::required(&self.postal_code, "postal code must not be empty").and_then(|_| {
                rules::length(&self.postal_code, 1, 10, "postal code must not exceed 10 characters")
            }),
        );
        errs.check(
            "regionCode",
            rules::required(&self.region_code, "region code must not be empty")
                .and_then(|_| rules::one_of(&self.region_code, REGION_CODES, "region code")),
        );
        let is_us = self.region_code == "US";
        errs.check(
            "stateProvince",
            rules::required(&self.state_province, "state/province must not be empty")
                .and_then(|_| {
                    rules::when(is_us, || {
                        rules::matches(
                            &self.state_province,
                            &US_STATE,
                            "US state must be a two-letter uppercase abbreviation",
                        )
                    })
                })
                .and_then(|_| {
                    rules::when(!is_us, || {
                        rules::length(
                            &self.state_province,
                            1,
                            10,
                            "state/province must not exceed 10 characters",
                        )
                    })
                }),
        );
        errs.into_result()
    }
}

#[cfg(test)]
pub(crate) fn sample(region: &str, state: &str) -> Address {
    Address {
        name: "ZEB2".into(),
        phone_number: "1096398373".into(),
        street_address: "2078 E Francis Street".into(),
        city: "Ontario".into(),
        state_province: state.into(),
        postal_code: "91761".into(),
        region_code: region.into(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_us_address() {
        assert!(sample("US", "CA").validate().is_ok());
    }

    #[test]
    fn us_state_must_be_two_uppercase_letters() {
        let err = sample("US", "Texas").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "US state must be a two-letter uppercase abbreviation"
        );
        assert!(sample("US", "tx").validate().is_err());
    }

    #[test]
    fn non_us_state_allows_longer_names() {
        assert!(sample("CA", "Ontario").validate().is_ok());
        assert!(sample("CN", "Guangdong").validate().is_ok());
        let err = sample("CN", "Inner Mongolia").validate().unwrap_err();
        assert_eq!(err.to_string(), "state/province must not exceed 10 characters");
    }

    #[test]
    fn unsupported_region_is_named() {
        let err = sample("MX", "JAL").validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid region code MX");
    }

    #[test]
    fn serializes_camel_case() {
        let v = serde_json::to_value(sample("US", "CA")).unwrap();
        assert_eq!(v["streetAddress"], "2078 E Francis Street");
        assert_eq!(v["regionCode"], "US");
        assert_eq!(v["phoneCountryCode"], 0);
    }
}
