//! Client entity model and DTOs.

use folio_core::merge::merge_text;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::Entity;

/// Name of the unique constraint on `clients.name`.
pub const CLIENT_NAME_CONSTRAINT: &str = "uq_clients_name";

/// A client row from the `clients` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    /// Unique across all clients, at most 100 characters.
    pub name: String,
    pub link: String,
    pub image_url: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateClient {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Client name is required and must be at most 100 characters"
    ))]
    pub name: String,
    #[validate(length(min = 1, message = "Link is required"))]
    pub link: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    #[validate(length(
        max = 100,
        message = "Client name must be at most 100 characters"
    ))]
    pub name: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

impl Entity for Client {
    type Create = CreateClient;
    type Update = UpdateClient;

    const NAME: &'static str = "Client";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreateClient, now: Timestamp) -> Self {
        Client {
            id,
            name: input.name.clone(),
            link: input.link.clone(),
            image_url: input.image_url.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, input: &UpdateClient) -> bool {
        let mut changed = merge_text(&mut self.name, input.name.as_deref());
        changed |= merge_text(&mut self.link, input.link.as_deref());
        changed |= merge_text(&mut self.image_url, input.image_url.as_deref());
        changed
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    fn unique_key(&self) -> Option<(&'static str, &str)> {
        Some((CLIENT_NAME_CONSTRAINT, &self.name))
    }
}
