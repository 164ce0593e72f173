//! Client error types.
//!
//! Every failed call is classified exactly once, at the response boundary,
//! into a [`ClientError`]. Callers branch on [`ClientError::kind`] or the
//! `is_*` predicates instead of matching on message text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur when using the Lotus client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The service answered with a structured error body.
    #[error("{error}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Decoded error body.
        error: ApiError,
    },

    /// The service answered with a non-2xx status and an unstructured body.
    #[error("server status code: {status}, {}", body_or_nil(.body))]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The call exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Connection, TLS, or other transport failure.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A 2xx body did not match the expected response shape.
    #[error("failed to decode response body (status {status}): {source}")]
    Decode {
        /// HTTP status code.
        status: u16,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body or query value could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

fn body_or_nil(body: &str) -> &str {
    if body.is_empty() {
        "nil body"
    } else {
        body
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Network(err)
        }
    }
}

/// Discriminant of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structured API error.
    Api,
    /// Unstructured non-2xx response.
    Http,
    /// Timeout.
    Timeout,
    /// Transport failure.
    Network,
    /// Undecodable success body.
    Decode,
    /// Request encoding failure.
    Serialization,
    /// Invalid configuration.
    Configuration,
}

impl ClientError {
    /// The error's kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api { .. } => ErrorKind::Api,
            Self::Http { .. } => ErrorKind::Http,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Network(_) => ErrorKind::Network,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// HTTP status of the response, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Http { status, .. } | Self::Decode { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// The structured error body, if the service sent one.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Whether the service sent a structured error body.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Whether the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.category() == Some(ApiErrorCategory::NotFound)
    }

    /// Whether the resource already exists.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        self.category() == Some(ApiErrorCategory::Duplicate)
    }

    /// Whether the resource is in a state that does not allow the operation.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        self.category() == Some(ApiErrorCategory::InvalidState)
    }

    /// Whether the call timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    fn category(&self) -> Option<ApiErrorCategory> {
        self.api_error().map(ApiError::category)
    }
}

/// Structured error body returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable title, e.g. `not_found`. Empty when the body had none.
    #[serde(default)]
    pub title: String,
    /// Error type reported by the service.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Human-readable detail.
    #[serde(default)]
    pub detail: Option<String>,
    /// Per-field validation failures.
    #[serde(default)]
    pub validation_errors: Option<Vec<ValidationError>>,
}

impl ApiError {
    /// Parse a response body as a structured error.
    ///
    /// Any JSON object whose fields fit the error shape qualifies, including
    /// a bare `{"detail": ...}`. Arrays, scalars, and non-JSON bodies return
    /// `None`.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Category derived from the title, compared case-insensitively.
    #[must_use]
    pub fn category(&self) -> ApiErrorCategory {
        match self.title.to_lowercase().as_str() {
            "not_found" | "resource_not_found" | "does_not_exist" => ApiErrorCategory::NotFound,
            "duplicate_resource" => ApiErrorCategory::Duplicate,
            "invalid_state" => ApiErrorCategory::InvalidState,
            _ => ApiErrorCategory::Other,
        }
    }

    /// Validation failures, empty when none were reported.
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        self.validation_errors.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (detail: {})",
            self.title,
            self.detail.as_deref().unwrap_or_default()
        )
    }
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Offending attribute.
    #[serde(default)]
    pub attr: Option<String>,
    /// Description.
    #[serde(default)]
    pub detail: Option<String>,
}

/// Coarse classification of structured API errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCategory {
    /// The resource does not exist.
    NotFound,
    /// The resource already exists.
    Duplicate,
    /// The resource's state forbids the operation.
    InvalidState,
    /// Any other title.
    Other,
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
