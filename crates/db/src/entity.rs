//! The contract every stored record type fulfils.

use folio_core::types::{DbId, Timestamp};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

/// A flat record with store-assigned id, a create DTO and a sparse update DTO.
///
/// The SQL repositories encode these rules in their queries; the in-memory
/// store calls the methods below directly. Both must agree.
pub trait Entity: Serialize + Clone + Send + Sync + 'static {
    /// Input accepted by `create`. Required fields are enforced by `Validate`.
    type Create: DeserializeOwned + Validate + Send + Sync + 'static;
    /// Input accepted by `update`. Every field is optional.
    type Update: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Singular display name, e.g. `"Project"`.
    const NAME: &'static str;

    fn id(&self) -> DbId;

    /// Build the record a successful create would persist.
    fn from_create(id: DbId, input: &Self::Create, now: Timestamp) -> Self;

    /// Sparse-merge `input` into `self`. Returns `true` if any field changed.
    fn apply_update(&mut self, input: &Self::Update) -> bool;

    /// Record a modification time. Only called when `apply_update` changed something.
    fn touch(&mut self, now: Timestamp);

    /// Value that must be unique across all records of this type, if any,
    /// together with the name of the constraint enforcing it.
    fn unique_key(&self) -> Option<(&'static str, &str)> {
        None
    }
}
