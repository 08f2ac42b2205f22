/// Contact form submission endpoint
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use formrelay_core::ApiResponse;
use std::sync::Arc;
use tracing::debug;

use crate::context::ApiContext;

/// `POST /{route_key}`
///
/// The body is taken as raw bytes so that malformed JSON reaches the pipeline
/// and is reported as a missing field. The HTTP status mirrors `statusCode`.
pub async fn submit(
    State(ctx): State<Arc<ApiContext>>,
    Path(route_key): Path<String>,
    body: Bytes,
) -> (StatusCode, Json<ApiResponse>) {
    let body = match std::str::from_utf8(&body) {
        Ok("") => None,
        Ok(text) => Some(text),
        Err(e) => {
            debug!(body_len = body.len(), error = %e, "Request body is not valid UTF-8");
            None
        }
    };

    let response = ctx.processor.process(&route_key, body).await;

    (status_for(&response), Json(response))
}

pub(crate) fn status_for(response: &ApiResponse) -> StatusCode {
    StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
