/// Formrelay API - Contact form Lambda
///
/// This module converts API Gateway requests into an axum router that feeds the
/// contact form pipeline.
pub mod api;
pub mod context;
pub mod middleware;

pub use context::ApiContext;

use axum::{
    Router,
    body::Body as AxumBody,
    http::{Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use formrelay_core::ApiResponse;
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Builds the HTTP router for the contact form Lambda
pub fn router(ctx: Arc<ApiContext>) -> Router {
    Router::new()
        // Health endpoint takes precedence over the route key capture
        .route("/health", get(api::health::handler))
        .route("/{route_key}", post(api::contact::submit))
        .fallback(api::not_found)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // The form is embedded on third-party sites
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(ctx)
}

/// Main API handler - converts Lambda HTTP request to Axum router
pub async fn handler(ctx: Arc<ApiContext>, event: Request) -> Result<Response<Body>, LambdaError> {
    info!("Processing API request: {} {}", event.method(), event.uri().path());

    let app = router(ctx);

    // Convert Lambda HTTP request to Axum request
    let (parts, body) = event.into_parts();
    let axum_request = http::Request::from_parts(parts, AxumBody::from(body.to_vec()));

    match app.oneshot(axum_request).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();

            // Convert Axum response body to Lambda response body
            let body_bytes = axum::body::to_bytes(body, usize::MAX)
                .await
                .unwrap_or_default();

            Ok(Response::from_parts(parts, Body::from(body_bytes.to_vec())))
        }
        Err(err) => {
            error!("Axum router error: {}", err);
            let body = serde_json::to_string(&ApiResponse::new(500, "Internal server error"))?;
            let response = Response::builder()
                .status(500)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))?;
            Ok(response)
        }
    }
}
