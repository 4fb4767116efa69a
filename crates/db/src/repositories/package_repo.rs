//! Repository for the `packages` table.

use folio_core::stacks::encode_list;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::package::{CreatePackage, Package, UpdatePackage};
use crate::repositories::stacks_update;

const COLUMNS: &str = "id, name, link, description, stacks, created_at, updated_at";

/// Provides CRUD operations for packages.
pub struct PackageRepo;

impl PackageRepo {
    /// Insert a new package, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePackage) -> Result<Package, sqlx::Error> {
        let query = format!(
            "INSERT INTO packages (name, link, description, stacks)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(&input.name)
            .bind(&input.link)
            .bind(&input.description)
            .bind(encode_list(input.stacks.as_deref().unwrap_or_default()))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packages WHERE id = $1");
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packages ORDER BY id ASC");
        sqlx::query_as::<_, Package>(&query).fetch_all(pool).await
    }

    /// Update a package. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePackage,
    ) -> Result<Option<Package>, sqlx::Error> {
        let query = format!(
            "UPDATE packages SET
                name = COALESCE(NULLIF($2, ''), name),
                link = COALESCE(NULLIF($3, ''), link),
                description = COALESCE(NULLIF($4, ''), description),
                stacks = COALESCE($5, stacks)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.link)
            .bind(&input.description)
            .bind(stacks_update(input.stacks.as_deref()))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
