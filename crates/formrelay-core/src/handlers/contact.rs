/// Contact form request pipeline
use crate::email::compose_notification;
use crate::error::FormRelayError;
use crate::models::{ApiResponse, ContactFormPayload, RelayConfig, RouteKey, Submission};
use crate::services::{EmailSender, HumanVerifier};
use crate::utils::logging::{redact_email, redact_secret, safe_submission_context};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Validates a submission, verifies the submitter and dispatches the notification.
///
/// Steps run in a fixed order and the first failure ends the request:
/// parse, required fields, human verification, target address, from address,
/// dispatch. No step is retried.
pub struct ContactFormProcessor {
    config: Arc<RelayConfig>,
    verifier: Arc<dyn HumanVerifier>,
    sender: Arc<dyn EmailSender>,
}

impl ContactFormProcessor {
    pub fn new(
        config: Arc<RelayConfig>,
        verifier: Arc<dyn HumanVerifier>,
        sender: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            config,
            verifier,
            sender,
        }
    }

    /// Handles one request. Always produces a response, never an error.
    pub async fn process(&self, route_key: &str, body: Option<&str>) -> ApiResponse {
        let route_key = RouteKey::new(route_key);

        info!(
            route_key = %route_key,
            body_len = body.map(str::len).unwrap_or(0),
            "Received contact form submission"
        );

        match self.run(&route_key, body).await {
            Ok(target) => {
                info!(
                    route_key = %route_key,
                    target = %redact_email(&target),
                    "Contact form submission delivered"
                );
                ApiResponse::sent_to(&target)
            }
            Err(err) => {
                warn!(
                    route_key = %route_key,
                    error_kind = err.kind(),
                    status_code = err.status_code(),
                    error = %redact_email(&err.to_string()),
                    "Contact form submission rejected"
                );
                ApiResponse::from(&err)
            }
        }
    }

    /// Returns the resolved target address on success
    async fn run(
        &self,
        route_key: &RouteKey,
        body: Option<&str>,
    ) -> Result<String, FormRelayError> {
        let submission = ContactFormPayload::parse(body).into_submission()?;

        let context = safe_submission_context(
            route_key.as_str(),
            &submission.submitter_email,
            &submission.subject,
        );
        debug!(context = %context, "Required fields present");

        self.verify_human(route_key, &submission).await?;

        let target = self
            .config
            .target_address(route_key)
            .ok_or_else(|| FormRelayError::TargetAddressNotFound(route_key.to_string()))?;
        let from = self
            .config
            .from_address(route_key)
            .ok_or_else(|| FormRelayError::FromAddressNotFound(route_key.to_string()))?;

        let recipient = self.config.recipient_for(target);
        if recipient != target {
            debug!(
                route_key = %route_key,
                recipient = %redact_email(recipient),
                "Delivering to operator inbox instead of route target"
            );
        }

        let email = compose_notification(&submission, from, recipient);
        let outcome = self.sender.send(&email).await;

        if !outcome.delivered {
            let detail = outcome
                .error_detail
                .unwrap_or_else(|| "unknown dispatch error".to_string());
            return Err(FormRelayError::Dispatch(detail));
        }

        info!(
            route_key = %route_key,
            message_id = outcome.provider_message_id.as_deref().unwrap_or("unknown"),
            "Notification dispatched"
        );

        Ok(target.to_string())
    }

    /// A route without a secret still goes through verification, with an empty secret
    async fn verify_human(
        &self,
        route_key: &RouteKey,
        submission: &Submission,
    ) -> Result<(), FormRelayError> {
        let secret = self.config.verification_secret(route_key);
        if secret.is_none() {
            warn!(route_key = %route_key, "No verification secret configured for route");
        }

        debug!(
            route_key = %route_key,
            secret = redact_secret(secret),
            token = redact_secret(Some(submission.verification_token.as_str())),
            "Verifying submitter"
        );

        let result = self
            .verifier
            .verify(secret.unwrap_or_default(), &submission.verification_token)
            .await;

        if result.success {
            return Ok(());
        }

        warn!(
            route_key = %route_key,
            error_kind = result.error_kind.map(|k| k.as_str()).unwrap_or("unknown"),
            detail = result.detail.as_deref().unwrap_or(""),
            "Human verification failed"
        );
        Err(FormRelayError::VerificationFailed {
            detail: result.detail,
        })
    }
}
