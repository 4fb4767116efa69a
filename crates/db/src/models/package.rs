//! Package entity model and DTOs.

use folio_core::merge::{merge_list, merge_text};
use folio_core::stacks::Stacks;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::Entity;

/// A package row from the `packages` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: DbId,
    pub name: String,
    /// NOT NULL in the database; defaults to `''`.
    pub link: String,
    /// NOT NULL in the database; defaults to `''`.
    pub description: String,
    #[sqlx(try_from = "String")]
    #[schema(value_type = Vec<String>)]
    pub stacks: Stacks,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new package. Only `name` is required.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePackage {
    #[validate(length(min = 1, message = "Package name is required"))]
    pub name: String,
    pub link: String,
    pub description: String,
    pub stacks: Option<Vec<String>>,
}

/// DTO for updating an existing package. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackage {
    pub name: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub stacks: Option<Vec<String>>,
}

impl Entity for Package {
    type Create = CreatePackage;
    type Update = UpdatePackage;

    const NAME: &'static str = "Package";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreatePackage, now: Timestamp) -> Self {
        Package {
            id,
            name: input.name.clone(),
            link: input.link.clone(),
            description: input.description.clone(),
            stacks: Stacks::new(input.stacks.clone().unwrap_or_default()),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, input: &UpdatePackage) -> bool {
        let mut changed = merge_text(&mut self.name, input.name.as_deref());
        changed |= merge_text(&mut self.link, input.link.as_deref());
        changed |= merge_text(&mut self.description, input.description.as_deref());
        changed |= merge_list(self.stacks.as_mut_vec(), input.stacks.as_deref());
        changed
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }
}
