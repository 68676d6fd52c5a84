//! 请求校验：递归校验嵌套请求对象，按字段名排序聚合错误。
//!
//! Request validation cascade.
//!
//! Every request type implements [`Validate`]. Composite types call the
//! `validate` of their nested objects and merge the results under the nested
//! field's name, producing a [`ValidationErrors`] tree. Rendering sorts field
//! names at every level and joins the messages with `"; "`, so the final
//! message is identical however the request was assembled.
//!
//! Validation happens entirely client-side: a failing request never reaches
//! the transport.
//!
//! ```rust
//! use swiftx_rust::validation::{rules, Validate, ValidationErrors};
//!
//! struct Parcel {
//!     weight: f64,
//!     label: String,
//! }
//!
//! impl Validate for Parcel {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errs = ValidationErrors::new();
//!         errs.check("weight", rules::required_number(self.weight, "weight must not be empty"));
//!         errs.check("label", rules::required(&self.label, "label must not be empty"));
//!         errs.into_result()
//!     }
//! }
//!
//! let err = Parcel { weight: 0.0, label: String::new() }.validate().unwrap_err();
//! assert_eq!(err.to_string(), "label must not be empty; weight must not be empty");
//! ```

mod outcome;
pub mod rules;

pub use outcome::{ValidationErrors, ValidationOutcome};

/// Client-side validation contract.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl<T: Validate> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        (**self).validate()
    }
}
