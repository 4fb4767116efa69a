//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::models::project::{CreateProject, Project, UpdateProject};

use crate::error::{AppResult, ErrorBody};
use crate::extract::{AppJson, AppPath, UpdateBody};
use crate::handlers::resource;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /projects/new
// ---------------------------------------------------------------------------

/// Create a project.
#[utoipa::path(
    post,
    path = "/api/projects/new",
    tag = "projects",
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Validation failed or malformed JSON", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<impl IntoResponse> {
    let (status, created) = resource::create::<Project>(&state, input).await?;
    Ok((status, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /projects
// ---------------------------------------------------------------------------

/// List all projects.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects, ordered by id", body = [Project]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(resource::list::<Project>(&state).await?))
}

// ---------------------------------------------------------------------------
// GET /projects/{id}
// ---------------------------------------------------------------------------

/// Get a single project by id.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project", body = Project),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No project with this id", body = ErrorBody)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Project>> {
    Ok(Json(resource::get_by_id::<Project>(&state, &id).await?))
}

// ---------------------------------------------------------------------------
// PUT /projects/{id}
// ---------------------------------------------------------------------------

/// Update a project. Only non-empty fields are applied.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project id")),
    request_body(
        content = UpdateProject,
        description = "JSON, or multipart/form-data with the same field names"
    ),
    responses(
        (status = 200, description = "The updated project", body = Project),
        (status = 400, description = "Malformed id or body", body = ErrorBody),
        (status = 404, description = "No project with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    UpdateBody(input): UpdateBody<UpdateProject>,
) -> AppResult<Json<Project>> {
    Ok(Json(resource::update::<Project>(&state, &id, input).await?))
}

// ---------------------------------------------------------------------------
// DELETE /projects/{id}
// ---------------------------------------------------------------------------

/// Permanently delete a project.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No project with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(resource::delete::<Project>(&state, &id).await?))
}
