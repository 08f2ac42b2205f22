/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Submission Fields
// ============================================================================
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_TOKEN: &str = "token";

// ============================================================================
// Configuration Keys
// ============================================================================

/// Prefix of the per-route target address variables (`TARGET_<KEY>`)
pub const ENV_TARGET_PREFIX: &str = "TARGET_";

/// Prefix of the per-route from address variables (`FROM_<KEY>`)
pub const ENV_FROM_PREFIX: &str = "FROM_";

/// Prefix of the per-route verification secret variables (`RECAPTCHA_SECRET_<KEY>`)
pub const ENV_SECRET_PREFIX: &str = "RECAPTCHA_SECRET_";

/// Optional JSON routing table
pub const ENV_ROUTING_MAP: &str = "ROUTING_MAP";

pub const ENV_VERIFY_URL: &str = "RECAPTCHA_VERIFY_URL";
pub const ENV_VERIFY_TIMEOUT_MS: &str = "VERIFY_TIMEOUT_MS";
pub const ENV_DISPATCH_TIMEOUT_MS: &str = "DISPATCH_TIMEOUT_MS";

/// When set, every notification is delivered to this inbox
pub const ENV_OPERATOR_INBOX: &str = "OPERATOR_INBOX";

// ============================================================================
// Human Verification
// ============================================================================

/// Google reCAPTCHA verification endpoint
pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Default verification call timeout in milliseconds
pub const DEFAULT_VERIFY_TIMEOUT_MS: u64 = 5_000;

// ============================================================================
// Email Dispatch
// ============================================================================

/// Default dispatch call timeout in milliseconds
pub const DEFAULT_DISPATCH_TIMEOUT_MS: u64 = 10_000;

/// Intro line of every notification
pub const NOTIFICATION_INTRO: &str = "A message from your contact form!";

// ============================================================================
// Response Messages
// ============================================================================

/// Body of responses for paths that carry no route key
pub const MSG_NOT_FOUND: &str = "Not found";
