/// Health check endpoint
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::context::ApiContext;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    /// Number of configured route keys
    pub routes: usize,
}

/// Health check handler
///
/// Reports static state only; no outbound call is made.
pub async fn handler(State(ctx): State<Arc<ApiContext>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        routes: ctx.config.routes.len(),
    })
}
