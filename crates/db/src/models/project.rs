//! Project entity model and DTOs.

use folio_core::merge::{merge_list, merge_text};
use folio_core::stacks::Stacks;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::Entity;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub image_url: String,
    pub link: String,
    pub description: String,
    /// Stored as a JSON array in a TEXT column.
    #[sqlx(try_from = "String")]
    #[schema(value_type = Vec<String>)]
    pub stacks: Stacks,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. Missing fields deserialize as empty and
/// are then rejected by validation.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "Project name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    #[validate(length(min = 1, message = "Link is required"))]
    pub link: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub stacks: Option<Vec<String>>,
}

/// DTO for updating an existing project. Empty values leave the field as is.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub stacks: Option<Vec<String>>,
}

impl Entity for Project {
    type Create = CreateProject;
    type Update = UpdateProject;

    const NAME: &'static str = "Project";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreateProject, now: Timestamp) -> Self {
        Project {
            id,
            name: input.name.clone(),
            image_url: input.image_url.clone(),
            link: input.link.clone(),
            description: input.description.clone(),
            stacks: Stacks::new(input.stacks.clone().unwrap_or_default()),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, input: &UpdateProject) -> bool {
        let mut changed = merge_text(&mut self.name, input.name.as_deref());
        changed |= merge_text(&mut self.image_url, input.image_url.as_deref());
        changed |= merge_text(&mut self.link, input.link.as_deref());
        changed |= merge_text(&mut self.description, input.description.as_deref());
        changed |= merge_list(self.stacks.as_mut_vec(), input.stacks.as_deref());
        changed
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }
}
