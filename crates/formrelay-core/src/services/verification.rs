/// Human verification service (reCAPTCHA)
use crate::models::{VerificationErrorKind, VerificationResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Checks a client-supplied token with a third-party verification provider.
///
/// Implementations never fail: every transport or protocol problem is
/// reported as a failing [`VerificationResult`].
#[async_trait]
pub trait HumanVerifier: Send + Sync {
    async fn verify(&self, secret: &str, token: &str) -> VerificationResult;
}

/// `siteverify` response body
#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Google reCAPTCHA `siteverify` client
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    verify_url: String,
    timeout: Duration,
}

impl RecaptchaVerifier {
    pub fn new(client: reqwest::Client, verify_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            verify_url: verify_url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl HumanVerifier for RecaptchaVerifier {
    async fn verify(&self, secret: &str, token: &str) -> VerificationResult {
        let response = self
            .client
            .post(&self.verify_url)
            .timeout(self.timeout)
            .form(&[("secret", secret), ("response", token)])
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Verification request timed out"
                );
                return VerificationResult::failed(
                    VerificationErrorKind::Timeout,
                    format!("no response within {}ms", self.timeout.as_millis()),
                );
            }
            Err(e) => {
                warn!(error = %e, "Verification request failed");
                return VerificationResult::failed(VerificationErrorKind::Transport, e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Verification provider returned an error status");
            return VerificationResult::failed(
                VerificationErrorKind::Transport,
                format!("verification provider returned HTTP {}", status.as_u16()),
            );
        }

        let body: SiteVerifyResponse = match response.json().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                return VerificationResult::failed(
                    VerificationErrorKind::Timeout,
                    format!("no response within {}ms", self.timeout.as_millis()),
                );
            }
            Err(e) => {
                warn!(error = %e, "Verification response could not be parsed");
                return VerificationResult::failed(
                    VerificationErrorKind::MalformedResponse,
                    e.to_string(),
                );
            }
        };

        if body.success {
            debug!("Verification passed");
            VerificationResult::passed()
        } else {
            let detail = if body.error_codes.is_empty() {
                "verification rejected".to_string()
            } else {
                body.error_codes.join(", ")
            };
            debug!(error_codes = %detail, "Verification rejected");
            VerificationResult::failed(VerificationErrorKind::Rejected, detail)
        }
    }
}
