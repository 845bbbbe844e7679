//! Login gate endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{json_body, success, ApiResult};
use crate::auth::{LoginRequest, LoginResponse};
use crate::AppState;

/// POST /api/login - Check the submitted credentials.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let request = json_body(payload)?;
    let response = state.login.verify(&request)?;
    success(response)
}
