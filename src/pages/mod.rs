//! Top-level routed pages.

pub mod login;
pub mod register;
pub mod todos;
