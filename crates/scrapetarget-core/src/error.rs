//! Shared error type across scrapetarget crates.

use thiserror::Error;

/// Stable error codes, used in logs and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Auth failed.
    AuthFailed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Registry rejected a collector or metric.
    Registry,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Registry => "REGISTRY",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ScrapeTargetError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ScrapeTargetError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("auth failed")]
    AuthFailed,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("collector already registered: {0}")]
    DuplicateCollector(String),
    #[error("metric name already registered: {0}")]
    DuplicateMetric(String),
    #[error("unknown collector: {0}")]
    UnknownCollector(String),
    #[error("invalid metric: {0}")]
    InvalidMetric(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ScrapeTargetError {
    /// Map an error to its stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ScrapeTargetError::BadRequest(_) => ClientCode::BadRequest,
            ScrapeTargetError::AuthFailed => ClientCode::AuthFailed,
            ScrapeTargetError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            ScrapeTargetError::DuplicateCollector(_)
            | ScrapeTargetError::DuplicateMetric(_)
            | ScrapeTargetError::UnknownCollector(_)
            | ScrapeTargetError::InvalidMetric(_) => ClientCode::Registry,
            ScrapeTargetError::Internal(_) => ClientCode::Internal,
        }
    }
}
