//! Domain primitives shared by the store and the HTTP layer.
//!
//! Nothing in this crate touches the database or the network: it holds the
//! id/timestamp aliases, the domain error type, and the small pure helpers
//! (validation messages, sparse merge, stacks encoding) that both the
//! PostgreSQL store and the in-memory store rely on.

pub mod error;
pub mod merge;
pub mod stacks;
pub mod types;
pub mod validation;
