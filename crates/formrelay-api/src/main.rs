use formrelay_api::ApiContext;
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!(version = formrelay_core::VERSION, "Starting Formrelay contact form Lambda");

    // Routing table is loaded once; a bad configuration fails the cold start
    let ctx = ApiContext::new().await.map_err(|e| {
        tracing::error!(error = %format!("{:#}", e), "Failed to initialize API context");
        Error::from(format!("{:#}", e))
    })?;

    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        async move { formrelay_api::handler(ctx, event).await }
    }))
    .await
}
