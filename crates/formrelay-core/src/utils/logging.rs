/// Logging utilities for PII redaction and secure logging
///
/// Submissions carry personal data, verification tokens and, through the
/// routing table, per-route secrets. Nothing from a request is logged without
/// passing through one of these helpers first.
use regex::Regex;
use std::sync::LazyLock;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use formrelay_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("Contact: test@acme.com for help"), "Contact: ***@acme.com for help");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            if let Some(at_pos) = email.find('@') {
                format!("***{}", &email[at_pos..])
            } else {
                "***@***".to_string()
            }
        })
        .to_string()
}

/// Redacts subject line for logging (truncates and masks)
///
/// Shows first few characters for debugging but hides content
///
/// # Examples
/// ```
/// use formrelay_core::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Confidential Document"), "Con...[21 chars]");
/// assert_eq!(redact_subject("Hi"), "Hi");
/// ```
pub fn redact_subject(subject: &str) -> String {
    const MAX_VISIBLE_CHARS: usize = 3;
    const MIN_LENGTH_TO_REDACT: usize = 6;

    let char_count = subject.chars().count();
    if char_count < MIN_LENGTH_TO_REDACT {
        subject.to_string()
    } else {
        let visible: String = subject.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", visible, char_count)
    }
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

/// Secrets and verification tokens are never shown, only whether they are set
pub fn redact_secret(secret: Option<&str>) -> &'static str {
    match secret {
        Some(s) if !s.is_empty() => "[redacted]",
        Some(_) => "[empty]",
        None => "[unset]",
    }
}

/// Creates safe log context for a submission
///
/// Returns a structured map that can be attached to log events
pub fn safe_submission_context(
    route_key: &str,
    submitter: &str,
    subject: &str,
) -> serde_json::Value {
    serde_json::json!({
        "route_key": route_key,
        "submitter_domain": extract_domain(submitter),
        "subject_preview": redact_subject(subject),
    })
}

/// Extracts domain from email address for safe logging
fn extract_domain(email: &str) -> String {
    email.split('@').nth(1).unwrap_or("unknown").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_email() {
        assert_eq!(redact_email("user@example.com"), "***@example.com");
        assert_eq!(
            redact_email("Contact test@acme.com for help"),
            "Contact ***@acme.com for help"
        );
        assert_eq!(
            redact_email("From: alice@foo.com To: bob@bar.com"),
            "From: ***@foo.com To: ***@bar.com"
        );
        assert_eq!(redact_email("no address here"), "no address here");
    }

    #[test]
    fn test_redact_subject() {
        assert_eq!(redact_subject("Short"), "Short");
        assert_eq!(redact_subject("This is a long subject"), "Thi...[22 chars]");
        assert_eq!(redact_subject(""), "");
        // Multi-byte characters are counted, not sliced
        assert_eq!(redact_subject("Grüße aus Köln"), "Grü...[14 chars]");
    }

    #[test]
    fn test_redact_body() {
        assert_eq!(redact_body("Hello world"), "[11 bytes]");
        assert_eq!(redact_body(""), "[0 bytes]");
    }

    #[test]
    fn test_redact_secret() {
        assert_eq!(redact_secret(Some("6LeIxAcTAAAAAGG")), "[redacted]");
        assert_eq!(redact_secret(Some("")), "[empty]");
        assert_eq!(redact_secret(None), "[unset]");
    }

    #[test]
    fn test_safe_submission_context() {
        let context = safe_submission_context("acme", "user@example.com", "Confidential Matter");

        assert_eq!(context["route_key"], "acme");
        assert_eq!(context["submitter_domain"], "example.com");
        assert_eq!(context["subject_preview"], "Con...[19 chars]");
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("user@example.com"), "example.com");
        assert_eq!(extract_domain("invalid"), "unknown");
    }
}
