//! 错误分类：定义 8 个规范错误种类及其重试语义。
//!
//! Error taxonomy shared by every SwiftX call.
//!
//! Every failure the client surfaces maps onto one [`ErrorKind`]. The kind is
//! computed once (validation, normalization of transport/status/envelope) and
//! the retry policy only ever looks at the kind, never at raw status codes.
//!
//! | Code  | Kind               | Retryable | Origin                          |
//! |-------|--------------------|-----------|---------------------------------|
//! | S1001 | `InputInvalid`     | no        | local validation, never sent    |
//! | S1002 | `Unauthorized`     | no        | HTTP 401                        |
//! | S1003 | `Forbidden`        | no        | HTTP 403                        |
//! | S2001 | `RateLimited`      | yes       | HTTP 429                        |
//! | S3001 | `ServerError`      | no        | HTTP 500                        |
//! | S3002 | `RemoteRejected`   | no        | `result.success == false`       |
//! | S4001 | `TransportFailure` | usually   | no response received            |
//! | S9999 | `Unknown`          | no        | any other non-success status    |
//!
//! ## Example
//!
//! ```rust
//! use swiftx_rust::error_code::ErrorKind;
//!
//! let kind = ErrorKind::from_http_status(429);
//! assert_eq!(kind.code(), "S2001");
//! assert!(kind.retryable());
//! ```

use std::fmt;

/// Classified failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// S1001: Request failed local validation
    InputInvalid,
    /// S1002: Signature rejected by the platform
    Unauthorized,
    /// S1003: Valid signature but insufficient permission
    Forbidden,
    /// S2001: Request rate limit exceeded
    RateLimited,
    /// S3001: Internal server error on the platform
    ServerError,
    /// S3002: Platform accepted the call but reported a logical failure
    RemoteRejected,
    /// S4001: No response was received
    TransportFailure,
    /// S9999: Error could not be classified
    Unknown,
}

impl ErrorKind {
    /// Returns the canonical code string (e.g., `"S2001"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputInvalid => "S1001",
            Self::Unauthorized => "S1002",
            Self::Forbidden => "S1003",
            Self::RateLimited => "S2001",
            Self::ServerError => "S3001",
            Self::RemoteRejected => "S3002",
            Self::TransportFailure => "S4001",
            Self::Unknown => "S9999",
        }
    }

    /// Returns the snake_case name used in logs (e.g., `"rate_limited"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InputInvalid => "input_invalid",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::RemoteRejected => "remote_rejected",
            Self::TransportFailure => "transport_failure",
            Self::Unknown => "unknown",
        }
    }

    /// Default retryability of the kind.
    ///
    /// `TransportFailure` is retryable by default; individual instances can
    /// opt out (see [`crate::client::NormalizedError`]).
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::TransportFailure)
    }

    /// Fixed message for the status codes the platform documents.
    pub fn fixed_message(&self) -> Option<&'static str> {
        match self {
            Self::Unauthorized => Some("invalid signature"),
            Self::Forbidden => Some("insufficient permission"),
            Self::RateLimited => Some("rate limit exceeded"),
            Self::ServerError => Some("server error, contact support"),
            _ => None,
        }
    }

    /// Maps a non-success HTTP status code to its kind.
    ///
    /// Only the codes the platform documents get a dedicated kind; everything
    /// else is `Unknown`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            429 => Self::RateLimited,
            500 => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_statuses_map_to_dedicated_kinds() {
        assert_eq!(ErrorKind::from_http_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_http_status(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_http_status(429), ErrorKind::RateLimited);
        assert_eq!(ErrorKind::from_http_status(500), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_http_status(502), ErrorKind::Unknown);
        assert_eq!(ErrorKind::from_http_status(400), ErrorKind::Unknown);
    }

    #[test]
    fn only_rate_limit_and_transport_are_retryable() {
        let retryable: Vec<_> = [
            ErrorKind::InputInvalid,
            ErrorKind::Unauthorized,
            ErrorKind::Forbidden,
            ErrorKind::RateLimited,
            ErrorKind::ServerError,
            ErrorKind::RemoteRejected,
            ErrorKind::TransportFailure,
            ErrorKind::Unknown,
        ]
        .into_iter()
        .filter(|k| k.retryable())
        .collect();
        assert_eq!(
            retryable,
            vec![ErrorKind::RateLimited, ErrorKind::TransportFailure]
        );
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(
            ErrorKind::Unauthorized.fixed_message(),
            Some("invalid signature")
        );
        assert_eq!(ErrorKind::Unknown.fixed_message(), None);
    }
}
