//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod mock_services;

use formrelay_core::models::{RelayConfig, RouteConfig};
use formrelay_core::ContactFormProcessor;
use mock_services::{MockEmailSender, MockVerifier};
use std::sync::Arc;

/// Body of the canonical valid submission
pub const VALID_BODY: &str =
    r#"{"subject":"Hi","message":"Hello","email":"a@b.com","token":"tok"}"#;

/// Config with one complete route, `acme`
pub fn acme_config() -> RelayConfig {
    RelayConfig::default().with_route(
        "acme",
        RouteConfig::new("owner@acme.com", "noreply@acme.com").with_secret("acme-secret"),
    )
}

/// Builds a JSON body from the given fields, leaving the others out
pub fn body_with(fields: &[(&str, &str)]) -> String {
    let map: serde_json::Map<String, serde_json::Value> = fields
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    serde_json::Value::Object(map).to_string()
}

/// Processor wired to the given mocks
pub fn processor_with(
    config: RelayConfig,
    verifier: &MockVerifier,
    sender: &MockEmailSender,
) -> ContactFormProcessor {
    ContactFormProcessor::new(
        Arc::new(config),
        Arc::new(verifier.clone()),
        Arc::new(sender.clone()),
    )
}
