//! HTTP Basic credentials.
//!
//! - `Credentials::from_authorization` parses an `Authorization` header value.
//! - `CredentialPair::verify` compares in constant time, always checking both
//!   fields so the response time does not reveal which one mismatched.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Result, ScrapeTargetError};

/// Username and password supplied by a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parse `Basic <base64(username:password)>`.
    ///
    /// The scheme is case-insensitive. The decoded payload is split at the
    /// first `:`, so the password may itself contain colons. Returns `None`
    /// for any other scheme, bad base64, non UTF-8 payloads or a missing `:`.
    pub fn from_authorization(value: &str) -> Option<Self> {
        let (scheme, payload) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(payload.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(Self::new(username, password))
    }

    /// Encode as an `Authorization` header value.
    pub fn to_authorization(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// The single accepted username/password pair.
#[derive(Clone)]
pub struct CredentialPair {
    expected: Credentials,
}

impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("expected", &self.expected)
            .finish()
    }
}

impl CredentialPair {
    /// Build the pair. Usernames containing `:` can never be sent over Basic
    /// auth, so they are rejected.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let expected = Credentials::new(username, password);
        if expected.username.is_empty() {
            return Err(ScrapeTargetError::BadRequest("username must not be empty".into()));
        }
        if expected.username.contains(':') {
            return Err(ScrapeTargetError::BadRequest("username must not contain ':'".into()));
        }
        Ok(Self { expected })
    }

    pub fn username(&self) -> &str {
        &self.expected.username
    }

    /// Exact, constant-time match on both fields.
    pub fn verify(&self, supplied: &Credentials) -> bool {
        let user_ok = constant_time_eq(
            supplied.username.as_bytes(),
            self.expected.username.as_bytes(),
        );
        let pass_ok = constant_time_eq(
            supplied.password.as_bytes(),
            self.expected.password.as_bytes(),
        );
        user_ok & pass_ok
    }

    /// Parse and verify a raw `Authorization` header value.
    pub fn check_header(&self, header: Option<&str>) -> Result<()> {
        match header.and_then(Credentials::from_authorization) {
            Some(c) if self.verify(&c) => Ok(()),
            _ => Err(ScrapeTargetError::AuthFailed),
        }
    }
}

/// Constant-time byte comparison.
///
/// Only the length leaks: unequal lengths return early, equal lengths always
/// scan every byte.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
