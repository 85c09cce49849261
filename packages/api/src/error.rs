//! Error taxonomy for the client layer.
//!
//! # Design
//! `Unauthorized` gets a dedicated variant because callers branch on it:
//! a 401/403 means the session is gone and the user belongs on the login
//! view, not in front of a generic error banner. All other non-2xx
//! responses land in `Server` with the status and the envelope message.

use thiserror::Error;

/// Errors surfaced by the domain services.
///
/// Every failure a service can see maps onto exactly one variant; nothing
/// panics and nothing else escapes the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input rejected client-side, before any request was issued.
    #[error("{0}")]
    Validation(String),

    /// The request never completed (connection, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status other than 401/403.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The server returned 401 or 403 — the session is no longer valid.
    #[error("authentication required")]
    Unauthorized { status: u16 },

    /// The response body did not match the expected envelope shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// User-facing message for banners and alerts.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when the server got far enough to answer.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Unauthorized { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the caller should send the user to the login view.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_requires_login() {
        let err = ApiError::Unauthorized { status: 401 };
        assert!(err.requires_login());
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn test_server_error_keeps_message_and_status() {
        let err = ApiError::Server {
            status: 400,
            message: "Email already exists".to_string(),
        };
        assert!(!err.requires_login());
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.message(), "Email already exists");
    }

    #[test]
    fn test_validation_has_no_status() {
        let err = ApiError::validation("name is required");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.message(), "name is required");
    }
}
