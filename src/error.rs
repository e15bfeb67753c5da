// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with consistent, displayable messages.

use crate::navigation::Navigation;
use crate::services::storage::StorageError;
use reqwest::StatusCode;
use serde_json::Value;

/// Classified failure of a call against the MyDish API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No token found")]
    Unauthenticated,

    #[error("Session expired")]
    SessionExpired,

    #[error("Request rejected ({status}): {message}")]
    RequestRejected { status: u16, message: String },

    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("Malformed response: {0}")]
    ParseFailure(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Credential storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Fallback shown when a response could not be understood.
    pub const GENERIC_MESSAGE: &'static str = "Something went wrong. Please try again.";

    /// Navigation the UI must perform in response to this error.
    ///
    /// Both authentication failures send the user back to the login flow.
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            ApiError::Unauthenticated | ApiError::SessionExpired => Some(Navigation::Login),
            _ => None,
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthenticated => "No token found. Please log in.".to_string(),
            ApiError::SessionExpired => "Session expired. Please log in again.".to_string(),
            ApiError::RequestRejected { message, .. } => message.clone(),
            ApiError::NetworkUnavailable(_) => "Network error. Try again later.".to_string(),
            ApiError::ParseFailure(_) => Self::GENERIC_MESSAGE.to_string(),
            ApiError::InvalidInput(msg) => msg.clone(),
            ApiError::Storage(_) => "Could not save your session on this device.".to_string(),
        }
    }

    /// Whether the error means the stored session is unusable.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthenticated | ApiError::SessionExpired)
    }
}

/// Field-specific keys the backend uses for validation messages,
/// in the order they are consulted.
const FIELD_MESSAGE_KEYS: &[&str] = &[
    "userName",
    "username",
    "password",
    "currentPassword",
    "newPassword",
    "name",
    "description",
    "bodyText",
];

/// Extract a user-facing message from a rejected response.
///
/// Priority: `message`, then `error`, then the first known field-specific
/// key, then the status line text.
pub fn normalize_error_message(status: StatusCode, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    if let Some(Value::Object(map)) = parsed {
        let lookup = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        if let Some(msg) = lookup("message").or_else(|| lookup("error")) {
            return msg;
        }
        if let Some(msg) = FIELD_MESSAGE_KEYS.iter().find_map(|key| lookup(key)) {
            return msg;
        }
    }

    status_text(status)
}

/// Status line text: the canonical reason phrase when one exists.
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
