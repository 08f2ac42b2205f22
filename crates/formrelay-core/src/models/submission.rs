/// Contact form submission models
use crate::constants::{FIELD_EMAIL, FIELD_MESSAGE, FIELD_SUBJECT, FIELD_TOKEN};
use crate::error::FormRelayError;
use crate::utils::logging::redact_body;
use serde_json::{Map, Value};
use std::fmt;

/// Request body as received, before required fields are enforced.
///
/// Parsing never fails: a missing, malformed or non-object body yields a
/// payload with every field absent, so it is reported as a missing `subject`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormPayload {
    pub subject: Option<String>,
    pub message: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
}

impl ContactFormPayload {
    pub fn parse(body: Option<&str>) -> Self {
        let Some(body) = body else {
            tracing::debug!("Request carried no body");
            return Self::default();
        };

        let fields = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => {
                tracing::debug!(body = %redact_body(body), "Request body is not a JSON object");
                return Self::default();
            }
            Err(e) => {
                tracing::debug!(
                    body = %redact_body(body),
                    error = %e,
                    "Request body is not valid JSON"
                );
                return Self::default();
            }
        };

        Self {
            subject: field_text(&fields, FIELD_SUBJECT),
            message: field_text(&fields, FIELD_MESSAGE),
            email: field_text(&fields, FIELD_EMAIL),
            token: field_text(&fields, FIELD_TOKEN),
        }
    }

    /// Enforces required fields in declared order. Empty strings count as present.
    pub fn into_submission(self) -> Result<Submission, FormRelayError> {
        let subject = self.subject.ok_or(FormRelayError::MissingField(FIELD_SUBJECT))?;
        let message = self.message.ok_or(FormRelayError::MissingField(FIELD_MESSAGE))?;
        let submitter_email = self.email.ok_or(FormRelayError::MissingField(FIELD_EMAIL))?;
        let verification_token = self.token.ok_or(FormRelayError::MissingField(FIELD_TOKEN))?;

        Ok(Submission {
            subject,
            message,
            submitter_email,
            verification_token,
        })
    }
}

// `null` is absent; other non-string values keep their JSON text
fn field_text(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A submission that passed the required-field check
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    pub subject: String,
    pub message: String,
    pub submitter_email: String,
    pub verification_token: String,
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("subject", &self.subject)
            .field("message", &self.message)
            .field("submitter_email", &self.submitter_email)
            .field("verification_token", &"[redacted]")
            .finish()
    }
}

/// Tenant identifier taken from the request path.
///
/// Lookups are case-insensitive; the original spelling is kept for messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    raw: String,
    lookup: String,
}

impl RouteKey {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lookup = normalize_route_key(&raw);
        Self { raw, lookup }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Upper-cased key used against the routing table
    pub fn lookup_key(&self) -> &str {
        &self.lookup
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for RouteKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

pub fn normalize_route_key(key: &str) -> String {
    key.trim().to_uppercase()
}
