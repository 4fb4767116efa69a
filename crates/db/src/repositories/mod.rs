//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.
//!
//! Updates follow the sparse-merge rule: a column is only overwritten when
//! the bound value is non-NULL and non-empty (`COALESCE(NULLIF($n, ''), col)`).

pub mod client_repo;
pub mod package_repo;
pub mod project_repo;

pub use client_repo::ClientRepo;
pub use package_repo::PackageRepo;
pub use project_repo::ProjectRepo;

use folio_core::stacks::encode_list;

/// Encode an optional stacks update, treating an empty list as "not sent".
pub(crate) fn stacks_update(stacks: Option<&[String]>) -> Option<String> {
    stacks.filter(|s| !s.is_empty()).map(encode_list)
}
