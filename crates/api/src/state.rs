use std::sync::Arc;

use folio_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: both fields are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// The backing store. `PgStore` in production, `MemoryStore` in tests.
    pub store: Arc<dyn Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
