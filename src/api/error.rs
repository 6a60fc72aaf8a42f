use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;
use serde_json::json;

use crate::store::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Entry not found";

/// Handler failures with their HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// 404 with a JSON body.
    NotFound,
    /// 500 with the store message as plain text.
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": NOT_FOUND_MESSAGE})),
            )
                .into_response(),
            ApiError::Store(err) => {
                warn!("store query failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {err}")).into_response()
            }
        }
    }
}
