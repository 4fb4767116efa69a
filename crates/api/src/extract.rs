//! Request extractors whose rejections render as [`AppError`] JSON bodies.

use axum::extract::{FromRequest, FromRequestParts, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;
use folio_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Form field carrying the stacks list.
const STACKS_FIELD: &str = "stacks";

/// `axum::Json` with a 400 JSON rejection instead of axum's plain-text one.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with a 400 JSON rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Parse a raw `{id}` path segment.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<DbId> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", entity.to_lowercase())))
}

/// Body of an update request: JSON, or `multipart/form-data` whose field
/// names match the JSON keys.
///
/// Form input is folded into a JSON object and deserialized into `T`, so
/// both encodings go through the same DTO. File parts are skipped. The
/// `stacks` field may repeat, or carry a JSON array as its value.
pub struct UpdateBody<T>(pub T);

impl<S, T> FromRequest<S> for UpdateBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(req.headers()) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(UpdateBody(value));
        }

        let multipart = Multipart::from_request(req, state).await?;
        let pairs = read_text_fields(multipart).await?;
        let object = collect_form_fields(pairs)?;
        let value = serde_json::from_value(Value::Object(object))
            .map_err(|e| AppError::BadRequest(format!("Invalid form data: {e}")))?;
        Ok(UpdateBody(value))
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

async fn read_text_fields(mut multipart: Multipart) -> AppResult<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid form data: {}", e.body_text())))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid form data: {}", e.body_text())))?;
        pairs.push((name, text));
    }
    Ok(pairs)
}

/// Fold `(name, value)` form pairs into a JSON object.
///
/// Scalar fields keep their last value. `stacks` values accumulate in order.
pub fn collect_form_fields<I>(pairs: I) -> AppResult<Map<String, Value>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut object = Map::new();
    let mut stacks: Vec<String> = Vec::new();

    for (name, text) in pairs {
        if name == STACKS_FIELD {
            stacks.extend(parse_stacks_value(&text)?);
        } else {
            object.insert(name, Value::String(text));
        }
    }

    if !stacks.is_empty() {
        object.insert(STACKS_FIELD.to_string(), Value::from(stacks));
    }
    Ok(object)
}

fn parse_stacks_value(text: &str) -> AppResult<Vec<String>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(trimmed)
            .map_err(|e| AppError::BadRequest(format!("Invalid stacks value: {e}")));
    }
    Ok(vec![trimmed.to_string()])
}
