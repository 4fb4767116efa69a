//! Shared response body types for API handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// `{ "message": "..." }` confirmation body, returned by deletes.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
