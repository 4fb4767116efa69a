//! PostgreSQL persistence for projects, packages and clients.
//!
//! - [`models`] holds the row structs and their create/update DTOs.
//! - [`repositories`] holds the SQL, one zero-sized repo per table.
//! - [`store`] defines the [`Store`] capability trait handlers depend on,
//!   with [`PgStore`] as the production implementation.
//! - [`memory`] provides [`MemoryStore`], an in-process implementation of
//!   the same trait used to exercise handlers without a database.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod entity;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use entity::Entity;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{EntityStore, PgStore, Store};

pub type DbPool = sqlx::PgPool;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply any pending migrations from `db/migrations`.
///
/// This is the only schema management the service performs: tables are
/// created on first start and never altered at runtime.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
