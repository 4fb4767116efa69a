//! HTTP handlers, one module per resource.
//!
//! Each module exposes `create`, `list`, `get_by_id`, `update` and `delete`
//! for its entity. The shared logic lives in [`resource`].

pub mod client;
pub mod package;
pub mod project;
pub mod resource;
