// src/error.rs
//! Error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the client.
//! Each variant tells the story of what went wrong and where, enabling
//! composable recovery strategies in the embedding application.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"rate_limited"`,
/// the domain vocabulary is encoded in the type system. Each variant
/// tells you exactly what the Notion API reported and enables
/// pattern-based recovery without stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// Request body could not be understood
    InvalidRequest,
    /// Request URL is not valid
    InvalidRequestUrl,
    /// Request body contains invalid JSON
    InvalidJson,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// Conflict with current state of the resource
    Conflict,
    /// API rate limit exceeded, back off and retry
    RateLimited,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// The Notion-Version header is missing or unsupported
    MissingVersion,
    /// Notion's database backend is unreachable
    DatabaseConnectionUnavailable,
    /// Notion timed out while processing the request
    GatewayTimeout,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "invalid_request" => Self::InvalidRequest,
            "invalid_request_url" => Self::InvalidRequestUrl,
            "invalid_json" => Self::InvalidJson,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "object_not_found" => Self::ObjectNotFound,
            "conflict_error" => Self::Conflict,
            "rate_limited" => Self::RateLimited,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            "validation_error" => Self::ValidationFailed,
            "missing_version" => Self::MissingVersion,
            "database_connection_unavailable" => Self::DatabaseConnectionUnavailable,
            "gateway_timeout" => Self::GatewayTimeout,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Classify a bare HTTP status when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::RestrictedResource,
            404 => Self::ObjectNotFound,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            500 => Self::InternalError,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited
                | Self::ServiceUnavailable
                | Self::InternalError
                | Self::DatabaseConnectionUnavailable
                | Self::GatewayTimeout
        )
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::InvalidRequestUrl => write!(f, "invalid_request_url"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::MissingVersion => write!(f, "missing_version"),
            Self::DatabaseConnectionUnavailable => write!(f, "database_connection_unavailable"),
            Self::GatewayTimeout => write!(f, "gateway_timeout"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main error type for the client.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied value is outside its documented domain,
    /// e.g. a heading level other than 1, 2 or 3.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An inbound block payload is structurally malformed, most notably
    /// a missing `type` discriminator. Unknown discriminators are NOT a
    /// decode error; they deserialize with unset content.
    #[error("Malformed block payload: {0}")]
    Decode(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to serialize request: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to deserialize response: {source}\nBody: {body}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Invalid authentication header: {message}")]
    InvalidHeader { message: String },

    #[error("Notion API error ({status}): {code} - {message}")]
    Api {
        status: u16,
        code: NotionErrorCode,
        message: String,
        request_id: Option<String>,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl Error {
    /// The typed Notion error code, when this is an API-level failure.
    pub fn api_code(&self) -> Option<&NotionErrorCode> {
        match self {
            Error::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
