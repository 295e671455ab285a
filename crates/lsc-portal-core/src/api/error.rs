use serde_json::Value;
use thiserror::Error;

use crate::utils::truncate_string;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Credentials rejected or an auth operation refused, with a displayable message
    #[error("{0}")]
    Auth(String),

    /// The backend answered 401; the session has already been cleared
    #[error("Unauthorized: {}", .0.as_deref().unwrap_or("session expired, please log in again"))]
    Unauthorized(Option<String>),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request failed with status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No response was received
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Session store error: {0}")]
    Store(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Fields the backend uses for human-readable error text, in priority order
const MESSAGE_FIELDS: [&str; 3] = ["detail", "error", "errors"];

impl ApiError {
    /// Pull the displayable message out of a JSON error body, if there is one
    pub fn backend_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        MESSAGE_FIELDS.iter().find_map(|field| match value.get(field)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = Self::backend_message(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::AccessDenied(Self::describe(message, body)),
            404 => ApiError::NotFound(Self::describe(message, body)),
            code => ApiError::Status {
                status: code,
                message,
            },
        }
    }

    fn describe(message: Option<String>, body: &str) -> String {
        message.unwrap_or_else(|| truncate_string(body, MAX_ERROR_BODY_LENGTH))
    }

    /// Recast a backend-reported failure as an `Auth` error, using `fallback`
    /// when the backend gave no message. Network and client-side errors pass
    /// through unchanged.
    pub fn into_auth(self, fallback: &str) -> Self {
        match self {
            ApiError::Unauthorized(message) | ApiError::Status { message, .. } => {
                ApiError::Auth(message.unwrap_or_else(|| fallback.to_string()))
            }
            ApiError::AccessDenied(message) => ApiError::Auth(message),
            other => other,
        }
    }

    /// True when the failure means the user has to sign in again
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_) | ApiError::Unauthorized(_))
    }

    /// True when no response was received from the backend
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
