//! HTTP layer for the remote to-do API.
//!
//! DESIGN
//! ======
//! `auth` and `todos` wrap the remote endpoints one call per function, no
//! retries; failures map onto the small error taxonomy in `error` and
//! surface immediately to the caller. Payload shapes live in `types`.

pub mod auth;
pub mod error;
pub mod todos;
pub mod types;

/// Base URL of the remote API. Override at compile time via the
/// `TASKDECK_API_URL` environment variable.
pub fn api_base() -> &'static str {
    option_env!("TASKDECK_API_URL").unwrap_or("http://localhost:3000")
}

/// Join a path onto [`api_base`].
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}
