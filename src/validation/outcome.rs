//! Validation error tree and its deterministic rendering.

use std::collections::BTreeMap;
use std::fmt;

use super::Validate;

/// A single field's validation result: either a message or a nested tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Leaf(String),
    Tree(ValidationErrors),
}

impl ValidationOutcome {
    fn collect(&self, path: &str, out: &mut Vec<(String, String)>) {
        match self {
            ValidationOutcome::Leaf(message) => out.push((path.to_string(), message.clone())),
            ValidationOutcome::Tree(tree) => tree.collect(path, out),
        }
    }
}

/// Field-level validation errors, keyed by field name.
///
/// Keys are kept in a `BTreeMap` so rendering is independent of the order in
/// which fields were checked. Sequence elements are keyed `[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, ValidationOutcome>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of top-level fields that failed.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&ValidationOutcome> {
        self.fields.get(field)
    }

    /// Record a leaf message for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .insert(field.into(), ValidationOutcome::Leaf(message.into()));
    }

    /// Record the outcome of a rule chain for `field`. `Ok` records nothing.
    pub fn check(&mut self, field: impl Into<String>, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    /// Merge a nested tree under `field`. Empty trees are dropped.
    pub fn merge(&mut self, field: impl Into<String>, nested: ValidationErrors) {
        if !nested.is_empty() {
            self.fields
                .insert(field.into(), ValidationOutcome::Tree(nested));
        }
    }

    /// Validate a nested object and merge its errors under `field`.
    pub fn nested<V: Validate + ?Sized>(&mut self, field: impl Into<String>, value: &V) {
        if let Err(nested) = value.validate() {
            self.merge(field, nested);
        }
    }

    /// Validate every element of a sequence; each failing element is keyed by its index.
    pub fn each<V: Validate>(&mut self, field: impl Into<String>, items: &[V]) {
        let mut per_item = ValidationErrors::new();
        for (idx, item) in items.iter().enumerate() {
            per_item.nested(format!("[{idx}]"), item);
        }
        self.merge(field, per_item);
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Ordered `(field_path, message)` pairs.
    ///
    /// Paths are dotted (`packageInfo.senderAddress.name`); sequence elements
    /// attach without a dot (`skuList[0].quantity`).
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.collect("", &mut out);
        out
    }

    /// Messages only, in field order.
    pub fn messages(&self) -> Vec<String> {
        self.flatten().into_iter().map(|(_, m)| m).collect()
    }

    fn collect(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for (field, outcome) in &self.fields {
            let path = if prefix.is_empty() {
                field.clone()
            } else if field.starts_with('[') {
                format!("{prefix}{field}")
            } else {
                format!("{prefix}.{field}")
            };
            outcome.collect(&path, out);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        ok: bool,
    }

    impl Validate for Line {
        fn validate(&self) -> Result<(), ValidationErrors> {
            let mut errs = ValidationErrors::new();
            if !self.ok {
                errs.add("quantity", "quantity must be at least 1");
            }
            errs.into_result()
        }
    }

    #[test]
    fn renders_in_field_order_regardless_of_insertion() {
        let mut a = ValidationErrors::new();
        a.add("serviceType", "service type must not be empty");
        a.add("orderScope", "order scope must not be empty");

        let mut b = ValidationErrors::new();
        b.add("orderScope", "order scope must not be empty");
        b.add("serviceType", "service type must not be empty");

        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(
            a.to_string(),
            "order scope must not be empty; service type must not be empty"
        );
    }

    #[test]
    fn nested_trees_flatten_with_paths() {
        let mut inner = ValidationErrors::new();
        inner.add("name", "name must not be empty");
        let mut outer = ValidationErrors::new();
        outer.merge("senderAddress", inner);
        outer.add("weight", "weight must not be empty");

        assert_eq!(
            outer.flatten(),
            vec![
                ("senderAddress.name".to_string(), "name must not be empty".to_string()),
                ("weight".to_string(), "weight must not be empty".to_string()),
            ]
        );
    }

    #[test]
    fn each_reports_failing_elements_by_index() {
        let mut errs = ValidationErrors::new();
        errs.each(
            "skuList",
            &[Line { ok: true }, Line { ok: false }, Line { ok: true }],
        );
        assert_eq!(
            errs.flatten(),
            vec![(
                "skuList[1].quantity".to_string(),
                "quantity must be at least 1".to_string()
            )]
        );
    }

    #[test]
    fn empty_nested_tree_is_dropped() {
        let mut errs = ValidationErrors::new();
        errs.merge("pickupService", ValidationErrors::new());
        errs.each("skuList", &[Line { ok: true }]);
        assert!(errs.is_empty());
        assert!(errs.into_result().is_ok());
    }
}
