//! Reusable UI components.

pub mod header;
pub mod protected_route;
pub mod toaster;
pub mod todo_item;
