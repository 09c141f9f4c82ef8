//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `todos`, `toast`) so individual
//! components can depend on small focused models. Everything here is plain
//! Rust testable without a browser; the network and storage collaborators
//! are injected behind traits.

pub mod session;
pub mod toast;
pub mod todos;
