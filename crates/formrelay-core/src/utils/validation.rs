/// Input validation utilities
use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();
}

/// Submitter addresses are not enforced; this only decides whether one is
/// usable as a `Reply-To` header.
pub fn is_valid_email_address(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
