//! To-do CRUD endpoints, all bearer-authenticated.
//!
//! Same shape as the auth layer: real `gloo-net` calls under `hydrate`,
//! inert stubs otherwise, one attempt per call. A 401 comes back as
//! [`TodoError::Unauthorized`] so callers can force a logout on token expiry.

use super::error::TodoError;
use super::types::{Todo, TodoPatch};

/// Fetch the authenticated user's full to-do list.
pub async fn fetch_todos(token: &str) -> Result<Vec<Todo>, TodoError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&super::api_url("/todos"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| TodoError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(TodoError::from_status(resp.status()));
        }
        resp.json::<Vec<Todo>>()
            .await
            .map_err(|e| TodoError::Request(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(TodoError::Request("not available on server".to_owned()))
    }
}

/// Create a new to-do; the server assigns the id.
pub async fn create_todo(token: &str, title: &str, description: &str) -> Result<Todo, TodoError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::NewTodo {
            title,
            description,
            is_completed: false,
        };
        let resp = gloo_net::http::Request::post(&super::api_url("/todos"))
            .header("Authorization", &format!("Bearer {token}"))
            .json(&body)
            .map_err(|e| TodoError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TodoError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(TodoError::from_status(resp.status()));
        }
        resp.json::<Todo>()
            .await
            .map_err(|e| TodoError::Request(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, title, description);
        Err(TodoError::Request("not available on server".to_owned()))
    }
}

/// Apply a partial update to an existing to-do.
pub async fn update_todo(token: &str, id: u32, patch: &TodoPatch) -> Result<Todo, TodoError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::api_url(&format!("/todos/{id}"));
        let resp = gloo_net::http::Request::patch(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .json(patch)
            .map_err(|e| TodoError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TodoError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(TodoError::from_status(resp.status()));
        }
        resp.json::<Todo>()
            .await
            .map_err(|e| TodoError::Request(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, patch);
        Err(TodoError::Request("not available on server".to_owned()))
    }
}

/// Delete a to-do by id.
pub async fn delete_todo(token: &str, id: u32) -> Result<(), TodoError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::api_url(&format!("/todos/{id}"));
        let resp = gloo_net::http::Request::delete(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| TodoError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(TodoError::from_status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(TodoError::Request("not available on server".to_owned()))
    }
}
