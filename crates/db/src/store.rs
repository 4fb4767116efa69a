//! Store capability traits and the PostgreSQL implementation.
//!
//! Handlers only ever see `Arc<dyn Store>`. Production wires in [`PgStore`];
//! tests wire in [`crate::MemoryStore`].

use async_trait::async_trait;
use folio_core::types::DbId;

use crate::entity::Entity;
use crate::error::StoreError;
use crate::models::client::{Client, CreateClient, UpdateClient};
use crate::models::package::{CreatePackage, Package, UpdatePackage};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::{ClientRepo, PackageRepo, ProjectRepo};
use crate::DbPool;

/// Single-entity CRUD operations for one record type.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Persist a new record and return it with its assigned id.
    async fn create(&self, input: &E::Create) -> Result<E, StoreError>;

    /// Every record of this type. Empty when nothing is stored.
    async fn list(&self) -> Result<Vec<E>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, StoreError>;

    /// Sparse-merge `input` into the record. `None` if `id` is unknown.
    async fn update(&self, id: DbId, input: &E::Update) -> Result<Option<E>, StoreError>;

    /// Remove the record. `false` if `id` is unknown.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}

/// Everything the HTTP layer needs from a backing store.
#[async_trait]
pub trait Store:
    EntityStore<Project> + EntityStore<Package> + EntityStore<Client> + Send + Sync
{
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`Store`] backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl EntityStore<Project> for PgStore {
    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl EntityStore<Package> for PgStore {
    async fn create(&self, input: &CreatePackage) -> Result<Package, StoreError> {
        Ok(PackageRepo::create(&self.pool, input).await?)
    }

    async fn list(&self) -> Result<Vec<Package>, StoreError> {
        Ok(PackageRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Package>, StoreError> {
        Ok(PackageRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdatePackage,
    ) -> Result<Option<Package>, StoreError> {
        Ok(PackageRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(PackageRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl EntityStore<Client> for PgStore {
    async fn create(&self, input: &CreateClient) -> Result<Client, StoreError> {
        Ok(ClientRepo::create(&self.pool, input).await?)
    }

    async fn list(&self) -> Result<Vec<Client>, StoreError> {
        Ok(ClientRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Client>, StoreError> {
        Ok(ClientRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update(&self, id: DbId, input: &UpdateClient) -> Result<Option<Client>, StoreError> {
        Ok(ClientRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ClientRepo::delete(&self.pool, id).await?)
    }
}
