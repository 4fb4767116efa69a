//! CRUD operations shared by every resource.
//!
//! The per-resource modules are thin axum handlers that extract the request
//! and delegate here, so projects, packages and clients behave identically.

use axum::http::StatusCode;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::validate_input;
use folio_db::{Entity, EntityStore, Store};

use crate::error::AppResult;
use crate::extract::parse_id;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found<E: Entity>(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: E::NAME,
        id,
    }
}

/// Validate and persist a new record.
pub async fn create<E>(state: &AppState, input: E::Create) -> AppResult<(StatusCode, E)>
where
    E: Entity,
    dyn Store: EntityStore<E>,
{
    validate_input(&input)?;

    let created = EntityStore::<E>::create(state.store.as_ref(), &input).await?;
    tracing::info!(entity = E::NAME, id = created.id(), "Record created");
    Ok((StatusCode::CREATED, created))
}

/// Every record of type `E`, ordered by id.
pub async fn list<E>(state: &AppState) -> AppResult<Vec<E>>
where
    E: Entity,
    dyn Store: EntityStore<E>,
{
    let items = EntityStore::<E>::list(state.store.as_ref()).await?;
    tracing::debug!(entity = E::NAME, count = items.len(), "Listed records");
    Ok(items)
}

pub async fn get_by_id<E>(state: &AppState, raw_id: &str) -> AppResult<E>
where
    E: Entity,
    dyn Store: EntityStore<E>,
{
    let id = parse_id(raw_id, E::NAME)?;
    let found = EntityStore::<E>::find_by_id(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    Ok(found)
}

/// Sparse-merge `input` into an existing record.
///
/// Absent or empty fields keep their stored value.
pub async fn update<E>(state: &AppState, raw_id: &str, input: E::Update) -> AppResult<E>
where
    E: Entity,
    dyn Store: EntityStore<E>,
{
    let id = parse_id(raw_id, E::NAME)?;
    validate_input(&input)?;

    let updated = EntityStore::<E>::update(state.store.as_ref(), id, &input)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    tracing::info!(entity = E::NAME, id, "Record updated");
    Ok(updated)
}

pub async fn delete<E>(state: &AppState, raw_id: &str) -> AppResult<MessageResponse>
where
    E: Entity,
    dyn Store: EntityStore<E>,
{
    let id = parse_id(raw_id, E::NAME)?;
    let deleted = EntityStore::<E>::delete(state.store.as_ref(), id).await?;
    if !deleted {
        return Err(not_found::<E>(id).into());
    }

    tracing::info!(entity = E::NAME, id, "Record deleted");
    Ok(MessageResponse::new(format!("{} deleted successfully", E::NAME)))
}
