//! Unified error type for the veriwork workspace.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Error code attached to every session-expiry failure.
pub const SESSION_EXPIRED_CODE: &str = "session_expired";

/// Standard wording shown when no valid credential can be obtained.
pub const DEFAULT_SESSION_EXPIRED_MESSAGE: &str =
    "Your session has expired. Please sign in again.";

/// Enumerates all error kinds that can occur across veriwork crates.
#[derive(Debug, Error)]
pub enum VeriworkError {
    /// No valid credential is obtainable; the user must sign in again.
    #[error("{message}")]
    SessionExpired { message: String },

    /// A backend call failed; carries the normalized, display-safe record.
    #[error("{0}")]
    Api(ApiError),

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(String),

    /// JSON serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Config(String),
}

// ── Feature-gated From impls ──────────────────────────────────────────────────

#[cfg(feature = "rquest")]
impl From<rquest::Error> for VeriworkError {
    fn from(e: rquest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl VeriworkError {
    /// Builds a session-expiry error with the given user-facing message.
    pub fn session_expired(message: impl Into<String>) -> Self {
        Self::SessionExpired {
            message: message.into(),
        }
    }

    /// The HTTP status this error maps to, when one applies.
    ///
    /// Session expiry is always 401; normalized API errors carry the status
    /// observed on the failing response.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::SessionExpired { .. } => Some(401),
            Self::Api(e) => e.http_status,
            _ => None,
        }
    }

    /// The stable error code, when one applies.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::SessionExpired { .. } => Some(SESSION_EXPIRED_CODE),
            Self::Api(e) => e.code.as_deref(),
            _ => None,
        }
    }

    /// The display-safe [`ApiError`] record for this error, whatever the
    /// variant. This is the one shape UI code consumes.
    #[must_use]
    pub fn to_api_error(&self) -> ApiError {
        match self {
            Self::SessionExpired { message } => ApiError {
                kind: ErrorKind::Session,
                message: message.clone(),
                code: Some(SESSION_EXPIRED_CODE.to_string()),
                details: None,
                http_status: Some(401),
            },
            Self::Api(e) => e.clone(),
            Self::Http(text) => ApiError::new(ErrorKind::Network, text.clone()),
            other => ApiError::new(ErrorKind::Internal, other.to_string()),
        }
    }
}

impl From<ApiError> for VeriworkError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, VeriworkError>;

/// Closed tag set for [`ApiError`].
///
/// Downstream code matches on this instead of probing nested optional fields
/// of whatever shape the backend happened to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The session credential is missing or unrenewable.
    Session,
    /// A non-2xx response from a backend endpoint.
    Http,
    /// The request never produced a response (DNS, connect, abort).
    Network,
    /// A failure observed as an already-thrown value rather than a response.
    Internal,
}

/// Canonical record for a failed backend call.
///
/// Created once at the boundary where the failure is first observed and
/// passed up by value; `message` is guaranteed non-empty and display-safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

impl ApiError {
    /// Creates a bare record with the given kind and message and no
    /// code/details/status attached.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            details: None,
            http_status: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
