/// Formrelay Core - Validation and routing pipeline for contact form submissions
///
/// This crate contains the data model, the human verification and email
/// dispatch collaborators, and the request pipeline used by the Formrelay
/// Lambda function.
pub mod constants;
pub mod email;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::FormRelayError;
pub use handlers::ContactFormProcessor;
pub use models::{ApiResponse, RelayConfig, RouteKey};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
