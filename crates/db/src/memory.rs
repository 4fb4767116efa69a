//! In-process [`Store`] implementation.
//!
//! Holds one ordered map per entity type behind a `tokio` read/write lock and
//! hands out ids from an atomic counter, mirroring `BIGSERIAL`. Merge,
//! uniqueness and not-found rules come from [`Entity`], so behaviour matches
//! the SQL repositories without a running database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use folio_core::types::DbId;
use tokio::sync::RwLock;

use crate::entity::Entity;
use crate::error::StoreError;
use crate::models::client::Client;
use crate::models::package::Package;
use crate::models::project::Project;
use crate::store::{EntityStore, Store};

/// Rows of a single entity type.
#[derive(Debug)]
pub struct MemoryTable<E> {
    rows: RwLock<BTreeMap<DbId, E>>,
    next_id: AtomicI64,
}

impl<E> Default for MemoryTable<E> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

/// Return a conflict if `candidate` collides with any other row's unique key.
fn check_unique<E: Entity>(rows: &BTreeMap<DbId, E>, candidate: &E) -> Result<(), StoreError> {
    let Some((constraint, key)) = candidate.unique_key() else {
        return Ok(());
    };
    let taken = rows.values().any(|row| {
        row.id() != candidate.id() && row.unique_key().is_some_and(|(_, other)| other == key)
    });
    if taken {
        return Err(StoreError::Conflict {
            constraint: constraint.to_string(),
        });
    }
    Ok(())
}

impl<E: Entity> MemoryTable<E> {
    async fn create(&self, input: &E::Create) -> Result<E, StoreError> {
        let mut rows = self.rows.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = E::from_create(id, input, chrono::Utc::now());
        check_unique(&rows, &record)?;
        rows.insert(id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Vec<E> {
        self.rows.read().await.values().cloned().collect()
    }

    async fn find_by_id(&self, id: DbId) -> Option<E> {
        self.rows.read().await.get(&id).cloned()
    }

    async fn update(&self, id: DbId, input: &E::Update) -> Result<Option<E>, StoreError> {
        let mut rows = self.rows.write().await;
        let Some(current) = rows.get(&id) else {
            return Ok(None);
        };

        let mut updated = current.clone();
        if updated.apply_update(input) {
            updated.touch(chrono::Utc::now());
        }
        check_unique(&rows, &updated)?;

        rows.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: DbId) -> bool {
        self.rows.write().await.remove(&id).is_some()
    }
}

/// Gives generic code access to the table holding `E`.
pub trait HasTable<E> {
    fn table(&self) -> &MemoryTable<E>;
}

/// [`Store`] kept entirely in memory. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: MemoryTable<Project>,
    packages: MemoryTable<Package>,
    clients: MemoryTable<Client>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasTable<Project> for MemoryStore {
    fn table(&self) -> &MemoryTable<Project> {
        &self.projects
    }
}

impl HasTable<Package> for MemoryStore {
    fn table(&self) -> &MemoryTable<Package> {
        &self.packages
    }
}

impl HasTable<Client> for MemoryStore {
    fn table(&self) -> &MemoryTable<Client> {
        &self.clients
    }
}

#[async_trait]
impl<E> EntityStore<E> for MemoryStore
where
    E: Entity,
    MemoryStore: HasTable<E>,
{
    async fn create(&self, input: &E::Create) -> Result<E, StoreError> {
        self.table().create(input).await
    }

    async fn list(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.table().list().await)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, StoreError> {
        Ok(self.table().find_by_id(id).await)
    }

    async fn update(&self, id: DbId, input: &E::Update) -> Result<Option<E>, StoreError> {
        self.table().update(id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.table().delete(id).await)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
