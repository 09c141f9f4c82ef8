//! Authentication endpoints: register, login, and bearer-token validation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors since these endpoints are only meaningful in the
//! browser.
//!
//! Every call is a single attempt — no retries anywhere in this layer; the
//! error surfaces immediately and the caller decides what to do with it.

use super::error::AuthError;
use super::types::LoginResponse;

/// Remote auth API surface.
///
/// Injectable so the session controller can be driven by scripted stubs in
/// tests instead of a live server.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Create an account. Does not establish a session.
    async fn register(&self, username: &str, password: &str) -> Result<(), AuthError>;
    /// Exchange credentials for a bearer token and identity.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AuthError>;
    /// Present a stored token to the validation endpoint.
    async fn validate(&self, token: &str) -> Result<(), AuthError>;
}

/// [`AuthApi`] backed by the remote HTTP API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&super::api_url("/users/register"))
                .json(&super::types::Credentials { username, password })
                .map_err(|e| AuthError::Registration(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Registration(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Registration(format!("status {}", resp.status())));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(AuthError::Registration("not available on server".to_owned()))
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&super::api_url("/auth/login"))
                .json(&super::types::Credentials { username, password })
                .map_err(|e| AuthError::Authentication(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Authentication(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Authentication(format!("status {}", resp.status())));
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| AuthError::Authentication(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(AuthError::Authentication("not available on server".to_owned()))
        }
    }

    async fn validate(&self, token: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&super::api_url("/auth/validate"))
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| AuthError::Validation(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Validation(format!("status {}", resp.status())));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(AuthError::Validation("not available on server".to_owned()))
        }
    }
}
