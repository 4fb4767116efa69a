//! Handlers for the `/clients` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::models::client::{CreateClient, Client, UpdateClient};

use crate::error::{AppResult, ErrorBody};
use crate::extract::{AppJson, AppPath, UpdateBody};
use crate::handlers::resource;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /clients/new
// ---------------------------------------------------------------------------

/// Create a client.
#[utoipa::path(
    post,
    path = "/api/clients/new",
    tag = "clients",
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, description = "Validation failed or malformed JSON", body = ErrorBody),
        (status = 409, description = "Client name already taken", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateClient>,
) -> AppResult<impl IntoResponse> {
    let (status, created) = resource::create::<Client>(&state, input).await?;
    Ok((status, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /clients
// ---------------------------------------------------------------------------

/// List all clients.
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "clients",
    responses(
        (status = 200, description = "All clients, ordered by id", body = [Client]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(resource::list::<Client>(&state).await?))
}

// ---------------------------------------------------------------------------
// GET /clients/{id}
// ---------------------------------------------------------------------------

/// Get a single client by id.
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "The client", body = Client),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No client with this id", body = ErrorBody)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Client>> {
    Ok(Json(resource::get_by_id::<Client>(&state, &id).await?))
}

// ---------------------------------------------------------------------------
// PUT /clients/{id}
// ---------------------------------------------------------------------------

/// Update a client. Only non-empty fields are applied.
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client id")),
    request_body(
        content = UpdateClient,
        description = "JSON, or multipart/form-data with the same field names"
    ),
    responses(
        (status = 200, description = "The updated client", body = Client),
        (status = 400, description = "Malformed id or body", body = ErrorBody),
        (status = 404, description = "No client with this id", body = ErrorBody),
        (status = 409, description = "Client name already taken", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    UpdateBody(input): UpdateBody<UpdateClient>,
) -> AppResult<Json<Client>> {
    Ok(Json(resource::update::<Client>(&state, &id, input).await?))
}

// ---------------------------------------------------------------------------
// DELETE /clients/{id}
// ---------------------------------------------------------------------------

/// Permanently delete a client.
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No client with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(resource::delete::<Client>(&state, &id).await?))
}
