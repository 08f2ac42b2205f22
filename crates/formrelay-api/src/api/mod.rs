/// API endpoint modules
pub mod contact;
pub mod health;

use axum::{Json, http::StatusCode};
use formrelay_core::ApiResponse;
use formrelay_core::constants::MSG_NOT_FOUND;

/// Fallback for paths that match no route
pub async fn not_found() -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::new(StatusCode::NOT_FOUND.as_u16(), MSG_NOT_FOUND)),
    )
}
