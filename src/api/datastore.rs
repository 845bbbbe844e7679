//! Datastore API endpoints.

use axum::extract::{Query, State};
use chrono::Utc;

use super::{success, ApiResult};
use crate::models::Datastore;
use crate::search::{EntryFilter, FilterParams};
use crate::AppState;

/// GET /api/datastore - Snapshot of the persisted register, optionally filtered.
pub async fn get_datastore(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Datastore> {
    let filter = EntryFilter::from(params);
    let entries = if filter.is_empty() {
        state.store.list().await?
    } else {
        state.store.query(&filter).await?
    };

    success(Datastore {
        storage_key: state.store.key().to_string(),
        generated_at: Utc::now().to_rfc3339(),
        entries,
    })
}
