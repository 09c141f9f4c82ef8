#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failures from the authentication endpoints.
///
/// Each variant wraps a transport or status description for logging only;
/// the HTTP status is not inspected beyond success/failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// `POST /users/register` failed.
    #[error("registration failed: {0}")]
    Registration(String),
    /// `POST /auth/login` failed.
    #[error("login failed: {0}")]
    Authentication(String),
    /// `GET /auth/validate` rejected the stored token.
    #[error("token validation failed: {0}")]
    Validation(String),
}

/// Failures from the todos endpoints.
///
/// `Unauthorized` is split out so callers can treat an expired token as a
/// forced logout rather than a transient failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    /// The bearer token was rejected (HTTP 401).
    #[error("not authorized")]
    Unauthorized,
    /// Any other status or transport failure.
    #[error("request failed: {0}")]
    Request(String),
}

impl TodoError {
    /// Map a non-2xx HTTP status to the error the todos layer reports.
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Request(format!("status {status}"))
        }
    }
}
