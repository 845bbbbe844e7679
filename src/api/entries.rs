//! Entry API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{json_body, success, ApiResponse, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateEntryRequest, Entry, EntryListing};
use crate::search::{EntryFilter, FilterParams};
use crate::AppState;

/// Confirmation flag for destructive requests.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: Option<String>,
}

impl ConfirmParams {
    fn confirmed(&self) -> bool {
        matches!(self.confirm.as_deref(), Some("true") | Some("1") | Some("yes"))
    }
}

/// GET /api/entries - List the register, optionally filtered.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<EntryListing> {
    let filter = EntryFilter::from(params);
    success(state.store.listing(&filter).await?)
}

/// POST /api/entries - Add an entry to the end of the register.
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> ApiResult<Entry> {
    let entry = Entry::from(json_body(payload)?);
    let entry = state.store.append(entry).await?;

    tracing::info!(id = %entry.id, "Daak entry added");
    Ok(ApiResponse::created(entry))
}

fn missing_track_id() -> AppError {
    AppError::Validation("Please enter a Daak ID to track.".to_string())
}

/// GET /api/entries/ - Track request submitted without an id.
pub async fn track_without_id() -> ApiResult<Entry> {
    Err(missing_track_id())
}

/// GET /api/entries/:id - Track a single entry by its exact id.
pub async fn track_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Entry> {
    let id = id.trim();
    if id.is_empty() {
        return Err(missing_track_id());
    }

    match state.store.find_by_id(id).await? {
        Some(entry) => success(entry),
        None => Err(AppError::NotFound(format!(
            "Daak with ID \"{}\" not found.",
            id
        ))),
    }
}

/// DELETE /api/entries/:id - Delete every entry with this id, then re-derive the view.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(confirm): Query<ConfirmParams>,
    Query(params): Query<FilterParams>,
) -> ApiResult<EntryListing> {
    if !confirm.confirmed() {
        return Err(AppError::ConfirmationRequired(format!(
            "Are you sure you want to delete Daak ID: {}?",
            id
        )));
    }

    let removed = state.store.delete_by_id(&id).await?;
    tracing::info!(id = %id, removed, "Daak entry deleted");

    let filter = EntryFilter::from(params);
    success(state.store.listing(&filter).await?)
}
