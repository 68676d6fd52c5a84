//! Enumerated wire values accepted by the platform.

pub const ORDER_SCOPE_DOMESTIC: &str = "DOMESTIC";
pub const ORDER_SCOPE_INTERNATIONAL: &str = "INTERNATIONAL";
pub const ORDER_SCOPES: &[&str] = &[ORDER_SCOPE_DOMESTIC, ORDER_SCOPE_INTERNATIONAL];

/// Economy.
pub const SERVICE_TYPE_ECO: &str = "ECO";
/// Express (recommended).
pub const SERVICE_TYPE_EXP: &str = "EXP";
pub const SERVICE_TYPES: &[&str] = &[SERVICE_TYPE_ECO, SERVICE_TYPE_EXP];

/// Home delivery.
pub const DELIVERY_METHOD_HDY: &str = "HDY";
/// Self pickup; requires a self-pickup code.
pub const DELIVERY_METHOD_SPU: &str = "SPU";
pub const DELIVERY_METHODS: &[&str] = &[DELIVERY_METHOD_HDY, DELIVERY_METHOD_SPU];

pub const COOPERATION_METHOD_PLATFORM: &str = "PLATFORM";
pub const COOPERATION_METHOD_MERCHANT: &str = "MERCHANT";
pub const COOPERATION_METHOD_WESTERN_POST: &str = "WESTERN_POST";
pub const COOPERATION_METHODS: &[&str] = &[
    COOPERATION_METHOD_PLATFORM,
    COOPERATION_METHOD_MERCHANT,
    COOPERATION_METHOD_WESTERN_POST,
];

pub const REGION_CODES: &[&str] = &["US", "CA", "CN"];
pub const CURRENCY_CODES: &[&str] = &["USD", "CAD", "HKD", "CNY"];
