use std::fmt;

use thiserror::Error;

use crate::client::NormalizedError;
use crate::error_code::ErrorKind;
use crate::validation::ValidationErrors;

/// Structured error context for configuration and decoding failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "app_secret", "trackingEventList[0]")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "config_loader", "/pingPong")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a call stopped before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The caller's [`CancelHandle`](crate::client::CancelHandle) fired.
    Caller,
    /// The overall call deadline (config timeout) elapsed.
    Deadline,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Caller => write!(f, "cancelled by caller"),
            CancelReason::Deadline => write!(f, "deadline exceeded"),
        }
    }
}

/// Unified error type for SwiftX calls.
#[derive(Debug, Error)]
pub enum Error {
    /// The request failed local validation and was never sent.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Normalized platform or transport failure.
    #[error("{0}")]
    Api(NormalizedError),

    #[error("Request cancelled: {reason}")]
    Cancelled { reason: CancelReason },

    /// A successful response whose body did not match the expected shape.
    #[error("Decode error: {message}{}", format_context(.context))]
    Decode {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl From<ValidationErrors> for Error {
    fn from(errs: ValidationErrors) -> Self {
        Error::Validation(errs)
    }
}

impl From<NormalizedError> for Error {
    fn from(err: NormalizedError) -> Self {
        Error::Api(err)
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new decode error with structured context
    pub fn decode_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Decode {
            message: msg.into(),
            context,
        }
    }

    /// Taxonomy kind, for errors that belong to it.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Validation(_) => Some(ErrorKind::InputInvalid),
            Error::Api(e) => Some(e.kind),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Api(e) if e.retryable)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }

    /// The normalized error, when the failure came from the platform or transport.
    pub fn as_api(&self) -> Option<&NormalizedError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Decode { context, .. } => Some(context),
            _ => None,
        }
    }
}
