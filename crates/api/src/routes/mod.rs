pub mod client;
pub mod health;
pub mod package;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects/new                 create (POST)
/// /projects                     list (GET)
/// /projects/{id}                get, update, delete
///
/// /packages/new                 create (POST)
/// /packages                     list (GET)
/// /packages/{id}                get, update, delete
///
/// /clients/new                  create (POST)
/// /clients                      list (GET)
/// /clients/{id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/packages", package::router())
        .nest("/clients", client::router())
}
