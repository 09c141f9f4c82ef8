#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Successful login payload from `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// Credentials body for the login and register endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// A single to-do item as the server represents it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

/// Body for creating a new to-do.
#[derive(Clone, Debug, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

/// Partial update for an existing to-do; absent fields are left untouched
/// by the server.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isCompleted", skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}
