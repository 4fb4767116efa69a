//! Handlers for the `/packages` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::models::package::{CreatePackage, Package, UpdatePackage};

use crate::error::{AppResult, ErrorBody};
use crate::extract::{AppJson, AppPath, UpdateBody};
use crate::handlers::resource;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /packages/new
// ---------------------------------------------------------------------------

/// Create a package. Only `name` is required.
#[utoipa::path(
    post,
    path = "/api/packages/new",
    tag = "packages",
    request_body = CreatePackage,
    responses(
        (status = 201, description = "Package created", body = Package),
        (status = 400, description = "Validation failed or malformed JSON", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePackage>,
) -> AppResult<impl IntoResponse> {
    let (status, created) = resource::create::<Package>(&state, input).await?;
    Ok((status, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /packages
// ---------------------------------------------------------------------------

/// List all packages.
#[utoipa::path(
    get,
    path = "/api/packages",
    tag = "packages",
    responses(
        (status = 200, description = "All packages, ordered by id", body = [Package]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Package>>> {
    Ok(Json(resource::list::<Package>(&state).await?))
}

// ---------------------------------------------------------------------------
// GET /packages/{id}
// ---------------------------------------------------------------------------

/// Get a single package by id.
#[utoipa::path(
    get,
    path = "/api/packages/{id}",
    tag = "packages",
    params(("id" = i64, Path, description = "Package id")),
    responses(
        (status = 200, description = "The package", body = Package),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No package with this id", body = ErrorBody)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Package>> {
    Ok(Json(resource::get_by_id::<Package>(&state, &id).await?))
}

// ---------------------------------------------------------------------------
// PUT /packages/{id}
// ---------------------------------------------------------------------------

/// Update a package. Only non-empty fields are applied.
#[utoipa::path(
    put,
    path = "/api/packages/{id}",
    tag = "packages",
    params(("id" = i64, Path, description = "Package id")),
    request_body(
        content = UpdatePackage,
        description = "JSON, or multipart/form-data with the same field names"
    ),
    responses(
        (status = 200, description = "The updated package", body = Package),
        (status = 400, description = "Malformed id or body", body = ErrorBody),
        (status = 404, description = "No package with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    UpdateBody(input): UpdateBody<UpdatePackage>,
) -> AppResult<Json<Package>> {
    Ok(Json(resource::update::<Package>(&state, &id, input).await?))
}

// ---------------------------------------------------------------------------
// DELETE /packages/{id}
// ---------------------------------------------------------------------------

/// Permanently delete a package.
#[utoipa::path(
    delete,
    path = "/api/packages/{id}",
    tag = "packages",
    params(("id" = i64, Path, description = "Package id")),
    responses(
        (status = 200, description = "Package deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No package with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(resource::delete::<Package>(&state, &id).await?))
}
