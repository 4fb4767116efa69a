use axum::routing::{get, post};
use axum::Router;

use crate::handlers::package;
use crate::state::AppState;

/// Routes mounted at `/packages`.
///
/// ```text
/// POST   /new      -> create
/// GET    /         -> list
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", post(package::create))
        .route("/", get(package::list))
        .route(
            "/{id}",
            get(package::get_by_id)
                .put(package::update)
                .delete(package::delete),
        )
}
