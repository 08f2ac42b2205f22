/// SES email sending service
use crate::error::FormRelayError;
use crate::models::{DispatchOutcome, NotificationEmail};
use crate::utils::validation::is_valid_email_address;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message, MultiPart, SinglePart};
use std::str::FromStr;
use std::time::Duration;

/// Delivers a composed notification.
///
/// Implementations never fail: errors come back as a non-delivered
/// [`DispatchOutcome`] carrying the detail.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &NotificationEmail) -> DispatchOutcome;
}

pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
    timeout: Duration,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    async fn send_raw(&self, email: &NotificationEmail) -> Result<String, FormRelayError> {
        use aws_sdk_ses::primitives::Blob;

        let raw_email = build_mime_message(email)?.formatted();

        let raw_message = aws_sdk_ses::types::RawMessage::builder()
            .data(Blob::new(raw_email))
            .build()
            .map_err(|e| FormRelayError::Dispatch(format!("Failed to build raw message: {}", e)))?;

        let request = self
            .client
            .send_raw_email()
            .raw_message(raw_message)
            .source(email.from.clone())
            .destinations(email.to.clone())
            .send();

        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| {
                FormRelayError::Dispatch(format!(
                    "SES did not respond within {}ms",
                    self.timeout.as_millis()
                ))
            })?
            .map_err(|e| {
                FormRelayError::Dispatch(format!(
                    "SES send_raw_email failed: {}",
                    aws_sdk_ses::error::DisplayErrorContext(&e)
                ))
            })?;

        Ok(response.message_id().to_string())
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send(&self, email: &NotificationEmail) -> DispatchOutcome {
        match self.send_raw(email).await {
            Ok(message_id) => {
                tracing::info!(message_id = %message_id, "Sent notification via SES");
                DispatchOutcome::delivered(message_id)
            }
            Err(FormRelayError::Dispatch(detail)) => DispatchOutcome::failed(detail),
            Err(e) => DispatchOutcome::failed(e.to_string()),
        }
    }
}

/// Builds the `multipart/alternative` MIME message sent through SES
///
/// `Reply-To` is only set when the submitter address is a usable mailbox; the
/// form does not enforce address syntax.
pub fn build_mime_message(email: &NotificationEmail) -> Result<Message, FormRelayError> {
    let from = Mailbox::from_str(&email.from)
        .map_err(|e| FormRelayError::Dispatch(format!("Invalid from address: {}", e)))?;
    let to = Mailbox::from_str(&email.to)
        .map_err(|e| FormRelayError::Dispatch(format!("Invalid to address: {}", e)))?;

    let mut builder = Message::builder().from(from).to(to).subject(&email.subject);

    if is_valid_email_address(&email.reply_to) {
        if let Ok(reply_to) = Mailbox::from_str(&email.reply_to) {
            builder = builder.reply_to(reply_to);
        }
    }

    builder
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(email.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html_body.clone()),
                ),
        )
        .map_err(|e| FormRelayError::Dispatch(format!("Failed to build email: {}", e)))
}
