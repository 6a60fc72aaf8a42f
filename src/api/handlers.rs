use axum::Json;
use axum::extract::{Path, State};
use log::debug;

use crate::store::{Entry, KeywordAssociation};

use super::error::ApiError;
use super::state::AppState;

pub const USAGE: &str =
    "Available endpoints: /api/entries, /api/entries/:id/css, /api/entries/:id/keywords";

pub async fn usage() -> &'static str {
    USAGE
}

pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, ApiError> {
    debug!("listing entries");
    let store = state.connector.connect()?;
    Ok(Json(store.list_entries().await?))
}

pub async fn entry_css(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    debug!("fetching entry {id}");
    let store = state.connector.connect()?;
    store
        .find_entry(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn entry_keywords(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<KeywordAssociation>>, ApiError> {
    debug!("fetching keywords for entry {id}");
    let store = state.connector.connect()?;
    let keywords = store.entry_keywords(&id).await?;
    if keywords.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(keywords))
}
