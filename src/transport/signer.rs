//! 请求签名：HMAC-SHA256 签名，每次请求重新计算。
//!
//! Request signing.
//!
//! The string to sign is the newline-joined sequence
//!
//! ```text
//! app_key \n timestamp \n nonce \n content_sha256 \n METHOD \n path \n query
//! ```
//!
//! with no trailing newline, where `content_sha256` is the hex SHA-256 of the
//! exact body bytes sent and `query` is the canonical query string placed on
//! the URL (see [`canonical_query`]). The signature is the hex HMAC-SHA256 of
//! that string keyed by the app secret.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::config::Credentials;
use crate::error::{Error, ErrorContext};
use crate::Result;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_TIMESTAMP: &str = "X-Timestamp";
pub const HEADER_NONCE: &str = "X-Nonce";
pub const HEADER_CONTENT_SHA256: &str = "X-Content-SHA256";
pub const HEADER_SIGNATURE: &str = "X-Signature";

const NONCE_BYTES: usize = 16;

/// Per-request signature values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Unix seconds.
    pub timestamp: i64,
    /// 32 hex chars.
    pub nonce: String,
    pub content_sha256: String,
    pub signature: String,
}

impl Signature {
    /// Header pairs to attach to the outgoing request.
    pub fn headers(&self) -> [(&'static str, String); 4] {
        [
            (HEADER_TIMESTAMP, self.timestamp.to_string()),
            (HEADER_NONCE, self.nonce.clone()),
            (HEADER_CONTENT_SHA256, self.content_sha256.clone()),
            (HEADER_SIGNATURE, self.signature.clone()),
        ]
    }
}

/// Signs requests with one set of credentials.
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    credentials: Credentials,
}

impl SignatureBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Signs with the current time and a fresh random nonce.
    pub fn build(&self, method: &str, path: &str, query: &str, body: &[u8]) -> Result<Signature> {
        self.build_at(unix_now(), &random_nonce(), method, path, query, body)
    }

    /// Deterministic variant of [`build`](Self::build).
    pub fn build_at(
        &self,
        timestamp: i64,
        nonce: &str,
        method: &str,
        path: &str,
        query: &str,
        body: &[u8],
    ) -> Result<Signature> {
        let content_sha256 = content_sha256(body);
        let method = method.to_ascii_uppercase();
        let timestamp_str = timestamp.to_string();
        let parts: [&str; 7] = [
            &self.credentials.app_key,
            &timestamp_str,
            nonce,
            &content_sha256,
            &method,
            path,
            query,
        ];
        let string_to_sign = parts.join("\n");

        let mut mac = HmacSha256::new_from_slice(self.credentials.app_secret().as_bytes())
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("failed to create HMAC: {e}"),
                    ErrorContext::new()
                        .with_field_path("app_secret")
                        .with_source("signer"),
                )
            })?;
        mac.update(string_to_sign.as_bytes());

        Ok(Signature {
            timestamp,
            nonce: nonce.to_string(),
            content_sha256,
            signature: hex::encode(mac.finalize().into_bytes()),
        })
    }
}

/// Hex SHA-256 of the body. An absent body hashes the empty slice.
pub fn content_sha256(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

/// 16 bytes from the OS CSPRNG, hex encoded.
pub fn random_nonce() -> String {
    let mut buf = [0u8; NONCE_BYTES];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

/// Form-urlencoded query with keys sorted. The same string is signed and sent.
pub fn canonical_query(params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort();
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in sorted {
        ser.append_pair(k, v);
    }
    ser.finish()
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
